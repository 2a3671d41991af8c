//! Dot and line halftone effects.

use hs_common::{
    EffectParams, EffectTypeId, ParamDef, ParamType, ParamValue, ShaderArgs, ShaderId, ShaderSpec,
    Viewport,
};

use crate::params::{get_bool, get_float};
use crate::traits::EffectDefinition;

fn dot_param_defs() -> Vec<ParamDef> {
    vec![
        ParamDef::new(
            "dotSize",
            "Dot Size",
            ParamType::Float {
                min: 0.5,
                max: 32.0,
            },
            ParamValue::Float(4.0),
        ),
        ParamDef::new(
            "spacing",
            "Spacing",
            ParamType::Float {
                min: 1.0,
                max: 64.0,
            },
            ParamValue::Float(8.0),
        ),
        ParamDef::new(
            "angle",
            "Angle",
            ParamType::Float {
                min: 0.0,
                max: 360.0,
            },
            ParamValue::Float(45.0),
        ),
        ParamDef::new("invert", "Invert", ParamType::Bool, ParamValue::Bool(false)),
    ]
}

fn line_param_defs() -> Vec<ParamDef> {
    vec![
        ParamDef::new(
            "lineWidth",
            "Line Width",
            ParamType::Float {
                min: 0.5,
                max: 32.0,
            },
            ParamValue::Float(2.0),
        ),
        ParamDef::new(
            "spacing",
            "Spacing",
            ParamType::Float {
                min: 1.0,
                max: 64.0,
            },
            ParamValue::Float(6.0),
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
        ParamDef::new("invert", "Invert", ParamType::Bool, ParamValue::Bool(false)),
    ]
}

/// Dot-grid halftone.
#[derive(Debug)]
pub struct DotHalftoneEffect {
    params: Vec<ParamDef>,
}

impl DotHalftoneEffect {
    pub fn new() -> Self {
        Self {
            params: dot_param_defs(),
        }
    }
}

impl Default for DotHalftoneEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectDefinition for DotHalftoneEffect {
    fn effect_type(&self) -> EffectTypeId {
        EffectTypeId::DotHalftone
    }

    fn display_name(&self) -> &str {
        "Dot Halftone"
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
        let dot_size = get_float("dotSize", params, &self.params);
        let spacing = get_float("spacing", params, &self.params);
        if dot_size <= 0.0 || spacing <= 0.0 {
            return None;
        }
        let angle = get_float("angle", params, &self.params);
        let invert = get_bool("invert", params, &self.params);

        let args = ShaderArgs::new()
            .push_u32(viewport.width)
            .push_u32(viewport.height)
            .push_f32(dot_size * scale)
            .push_f32(spacing * scale)
            .push_f32(angle.to_radians())
            .push_u32(u32::from(invert));

        Some(ShaderSpec {
            shader: ShaderId::DotHalftone,
            args,
        })
    }
}

/// Line-screen halftone.
#[derive(Debug)]
pub struct LineHalftoneEffect {
    params: Vec<ParamDef>,
}

impl LineHalftoneEffect {
    pub fn new() -> Self {
        Self {
            params: line_param_defs(),
        }
    }
}

impl Default for LineHalftoneEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectDefinition for LineHalftoneEffect {
    fn effect_type(&self) -> EffectTypeId {
        EffectTypeId::LineHalftone
    }

    fn display_name(&self) -> &str {
        "Line Halftone"
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
        let line_width = get_float("lineWidth", params, &self.params);
        let spacing = get_float("spacing", params, &self.params);
        if line_width <= 0.0 || spacing <= 0.0 {
            return None;
        }
        let angle = get_float("angle", params, &self.params);
        let invert = get_bool("invert", params, &self.params);

        let args = ShaderArgs::new()
            .push_u32(viewport.width)
            .push_u32(viewport.height)
            .push_f32(line_width * scale)
            .push_f32(spacing * scale)
            .push_f32(angle.to_radians())
            .push_u32(u32::from(invert));

        Some(ShaderSpec {
            shader: ShaderId::LineHalftone,
            args,
        })
    }
}
