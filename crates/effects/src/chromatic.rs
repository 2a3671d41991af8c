//! Chromatic aberration effect.

use hs_common::{
    EffectParams, EffectTypeId, ParamDef, ParamType, ParamValue, ShaderArgs, ShaderId, ShaderSpec,
    Viewport,
};

use crate::params::{get_bool, get_float};
use crate::traits::EffectDefinition;

fn param_defs() -> Vec<ParamDef> {
    vec![
        ParamDef::new(
            "amount",
            "Amount",
            ParamType::Float { min: 0.0, max: 1.0 },
            ParamValue::Float(0.15),
        ),
        ParamDef::new(
            "angle",
            "Angle",
            ParamType::Float {
                min: 0.0,
                max: 360.0,
            },
            ParamValue::Float(0.0),
        ),
        // Radial: offset channels away from the center rather than along a
        // fixed direction.
        ParamDef::new("radial", "Radial", ParamType::Bool, ParamValue::Bool(true)),
    ]
}

/// Chromatic aberration (RGB channel split).
#[derive(Debug)]
pub struct ChromaticAberrationEffect {
    params: Vec<ParamDef>,
}

impl ChromaticAberrationEffect {
    pub fn new() -> Self {
        Self {
            params: param_defs(),
        }
    }
}

impl Default for ChromaticAberrationEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectDefinition for ChromaticAberrationEffect {
    fn effect_type(&self) -> EffectTypeId {
        EffectTypeId::ChromaticAberration
    }

    fn display_name(&self) -> &str {
        "Chromatic Aberration"
    }

    fn param_defs(&self) -> &[ParamDef] {
        &self.params
    }

    fn shader_spec(
        &self,
        params: &EffectParams,
        viewport: Viewport,
        scale: f32,
    ) -> Option<ShaderSpec> {
        let amount = get_float("amount", params, &self.params);
        if amount <= 0.0 {
            return None;
        }
        let angle = get_float("angle", params, &self.params);
        let radial = get_bool("radial", params, &self.params);

        let args = ShaderArgs::new()
            .push_u32(viewport.width)
            .push_u32(viewport.height)
            .push_f32(amount * scale)
            .push_f32(angle.to_radians())
            .push_u32(u32::from(radial));

        Some(ShaderSpec {
            shader: ShaderId::ChromaticAberration,
            args,
        })
    }
}
