//! Blur effect.

use hs_common::{
    EffectParams, EffectTypeId, ParamDef, ParamType, ParamValue, ShaderArgs, ShaderId, ShaderSpec,
    Viewport,
};

use crate::params::{get_float, get_int};
use crate::traits::EffectDefinition;

fn param_defs() -> Vec<ParamDef> {
    vec![
        ParamDef::new(
            "radius",
            "Radius",
            ParamType::Float {
                min: 0.0,
                max: 100.0,
            },
            ParamValue::Float(8.0),
        ),
        ParamDef::new(
            "quality",
            "Quality",
            ParamType::Int { min: 1, max: 4 },
            ParamValue::Int(2),
        ),
    ]
}

/// Gaussian blur effect.
#[derive(Debug)]
pub struct BlurEffect {
    params: Vec<ParamDef>,
}

impl BlurEffect {
    pub fn new() -> Self {
        Self {
            params: param_defs(),
        }
    }
}

impl Default for BlurEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectDefinition for BlurEffect {
    fn effect_type(&self) -> EffectTypeId {
        EffectTypeId::Blur
    }

    fn display_name(&self) -> &str {
        "Blur"
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
        let radius = get_float("radius", params, &self.params);
        if radius <= 0.0 {
            return None;
        }
        let quality = get_int("quality", params, &self.params);

        let args = ShaderArgs::new()
            .push_u32(viewport.width)
            .push_u32(viewport.height)
            .push_f32(radius * scale)
            .push_i32(quality);

        Some(ShaderSpec {
            shader: ShaderId::Blur,
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_metadata() {
        let fx = BlurEffect::new();
        assert_eq!(fx.effect_type(), EffectTypeId::Blur);
        assert_eq!(fx.param_defs().len(), 2);
    }

    #[test]
    fn blur_defaults() {
        let fx = BlurEffect::new();
        let params = fx.default_params();
        assert_eq!(params["radius"], ParamValue::Float(8.0));
        assert_eq!(params["quality"], ParamValue::Int(2));
    }

    #[test]
    fn radius_scales_with_preview_scale() {
        let fx = BlurEffect::new();
        let spec = fx
            .shader_spec(&fx.default_params(), Viewport::new(960, 540), 0.5)
            .unwrap();
        assert_eq!(
            spec.args.entries()[2],
            hs_common::ShaderArg::F32(4.0) // 8.0 * 0.5
        );
    }

    #[test]
    fn zero_radius_is_noop() {
        let fx = BlurEffect::new();
        let mut params = fx.default_params();
        params.insert("radius".into(), ParamValue::Float(0.0));
        assert!(fx.shader_spec(&params, Viewport::default(), 1.0).is_none());
    }
}
