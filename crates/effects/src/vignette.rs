//! Vignette effect.
//!
//! Vignette is the one shape-parameterized effect: its parameter schema
//! depends on the selected shape (ellipse, circle, rectangle, linear), while
//! the base fields (`intensity`, `softness`, `color`) are shared by every
//! shape. Changing the shape re-derives a fresh, fully-populated config via
//! [`config_for_shape`] — base fields survive the change, shape-specific
//! fields are reset to the new shape's defaults.
//!
//! [`config_for_shape`]: VignetteEffect::config_for_shape

use hs_common::{
    EffectParams, EffectTypeId, ParamDef, ParamType, ParamValue, ShaderArgs, ShaderId, ShaderSpec,
    Viewport,
};

use crate::params::{get_color, get_float, get_text, get_vec2};
use crate::traits::EffectDefinition;

/// Shape of the vignette falloff region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VignetteShape {
    Ellipse,
    Circle,
    Rectangle,
    Linear,
}

impl VignetteShape {
    pub const ALL: [VignetteShape; 4] = [
        VignetteShape::Ellipse,
        VignetteShape::Circle,
        VignetteShape::Rectangle,
        VignetteShape::Linear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Linear => "linear",
        }
    }

    pub fn parse(s: &str) -> Option<VignetteShape> {
        Self::ALL.iter().copied().find(|shape| shape.as_str() == s)
    }

    /// Shape type integer passed to the shader.
    fn shader_index(&self) -> u32 {
        match self {
            Self::Ellipse => 0,
            Self::Circle => 1,
            Self::Rectangle => 2,
            Self::Linear => 3,
        }
    }
}

/// Base fields shared by every vignette shape.
const BASE_PARAM_NAMES: [&str; 3] = ["intensity", "softness", "color"];

fn shape_select_def(default: VignetteShape) -> ParamDef {
    ParamDef::new(
        "shape",
        "Shape",
        ParamType::Select {
            options: VignetteShape::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        },
        ParamValue::Text(default.as_str().into()),
    )
}

fn base_param_defs() -> Vec<ParamDef> {
    vec![
        ParamDef::new(
            "intensity",
            "Intensity",
            ParamType::Float { min: 0.0, max: 1.0 },
            ParamValue::Float(0.5),
        ),
        ParamDef::new(
            "softness",
            "Softness",
            ParamType::Float { min: 0.0, max: 1.0 },
            ParamValue::Float(0.5),
        ),
        ParamDef::new(
            "color",
            "Color",
            ParamType::Color,
            ParamValue::Color([0.0, 0.0, 0.0, 1.0]),
        ),
    ]
}

fn shape_specific_defs(shape: VignetteShape) -> Vec<ParamDef> {
    match shape {
        VignetteShape::Ellipse => vec![
            ParamDef::new(
                "center",
                "Center",
                ParamType::Vec2,
                ParamValue::Vec2([0.5, 0.5]),
            ),
            ParamDef::new(
                "radiusX",
                "Radius X",
                ParamType::Float { min: 0.0, max: 1.5 },
                ParamValue::Float(0.5),
            ),
            ParamDef::new(
                "radiusY",
                "Radius Y",
                ParamType::Float { min: 0.0, max: 1.5 },
                ParamValue::Float(0.5),
            ),
        ],
        VignetteShape::Circle => vec![
            ParamDef::new(
                "center",
                "Center",
                ParamType::Vec2,
                ParamValue::Vec2([0.5, 0.5]),
            ),
            ParamDef::new(
                "radius",
                "Radius",
                ParamType::Float { min: 0.0, max: 1.5 },
                ParamValue::Float(0.5),
            ),
        ],
        VignetteShape::Rectangle => vec![
            ParamDef::new(
                "inset",
                "Inset",
                ParamType::Float { min: 0.0, max: 0.5 },
                ParamValue::Float(0.1),
            ),
            ParamDef::new(
                "cornerRadius",
                "Corner Radius",
                ParamType::Float { min: 0.0, max: 0.5 },
                ParamValue::Float(0.1),
            ),
        ],
        VignetteShape::Linear => vec![
            ParamDef::new(
                "angle",
                "Angle",
                ParamType::Float {
                    min: 0.0,
                    max: 360.0,
                },
                ParamValue::Float(0.0),
            ),
            ParamDef::new(
                "offset",
                "Offset",
                ParamType::Float { min: 0.0, max: 1.0 },
                ParamValue::Float(0.5),
            ),
        ],
    }
}

/// Vignette effect (darken toward a shaped falloff region).
#[derive(Debug)]
pub struct VignetteEffect {
    /// Schema for the default shape (ellipse).
    params: Vec<ParamDef>,
}

impl VignetteEffect {
    pub fn new() -> Self {
        Self {
            params: Self::param_defs_for_shape(VignetteShape::Ellipse),
        }
    }

    /// The parameter sub-schema for one shape: the shape selector, the shared
    /// base fields, then the shape-specific fields.
    pub fn param_defs_for_shape(shape: VignetteShape) -> Vec<ParamDef> {
        let mut defs = vec![shape_select_def(shape)];
        defs.extend(base_param_defs());
        defs.extend(shape_specific_defs(shape));
        defs
    }

    /// Derive a fully-populated config for `shape`.
    ///
    /// Shared base fields (`intensity`, `softness`, `color`) are carried over
    /// from `existing` when present; shape-specific fields are filled with the
    /// shape's defaults. Fields belonging to the previous shape are dropped —
    /// the result never carries dangling params.
    pub fn config_for_shape(shape: VignetteShape, existing: Option<&EffectParams>) -> EffectParams {
        let mut params: EffectParams = Self::param_defs_for_shape(shape)
            .iter()
            .map(|d| (d.name.clone(), d.default.clone()))
            .collect();

        if let Some(existing) = existing {
            for name in BASE_PARAM_NAMES {
                if let Some(value) = existing.get(name) {
                    params.insert(name.to_string(), value.clone());
                }
            }
        }

        params
    }
}

impl Default for VignetteEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectDefinition for VignetteEffect {
    fn effect_type(&self) -> EffectTypeId {
        EffectTypeId::Vignette
    }

    fn display_name(&self) -> &str {
        "Vignette"
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
        let shape = VignetteShape::parse(get_text("shape", params, &self.params))
            .unwrap_or(VignetteShape::Ellipse);
        let defs = Self::param_defs_for_shape(shape);

        let intensity = get_float("intensity", params, &defs);
        if intensity <= 0.0 {
            return None;
        }
        let softness = get_float("softness", params, &defs);
        let color = get_color("color", params, &defs);

        // Shape geometry packed into one vec4; meaning depends on the shape.
        let geometry = match shape {
            VignetteShape::Ellipse => {
                let center = get_vec2("center", params, &defs);
                let rx = get_float("radiusX", params, &defs);
                let ry = get_float("radiusY", params, &defs);
                [center[0], center[1], rx, ry]
            }
            VignetteShape::Circle => {
                let center = get_vec2("center", params, &defs);
                let radius = get_float("radius", params, &defs);
                [center[0], center[1], radius, radius]
            }
            VignetteShape::Rectangle => {
                let inset = get_float("inset", params, &defs);
                let corner = get_float("cornerRadius", params, &defs);
                [inset, inset, corner, 0.0]
            }
            VignetteShape::Linear => {
                let angle = get_float("angle", params, &defs);
                let offset = get_float("offset", params, &defs);
                [angle.to_radians(), offset, 0.0, 0.0]
            }
        };

        let args = ShaderArgs::new()
            .push_u32(viewport.width)
            .push_u32(viewport.height)
            .push_f32(scale)
            .push_u32(shape.shader_index())
            .push_vec4(geometry)
            .push_f32(intensity)
            .push_f32(softness)
            .push_vec4(color);

        Some(ShaderSpec {
            shader: ShaderId::Vignette,
            args,
        })
    }
}
