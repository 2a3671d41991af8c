//! Effect parameter values, definitions, and schemas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameter values keyed by name, as stored on an effect modifier.
///
/// Serializes as a plain JSON object (`{"radius": 8, "color": [1,1,1,1]}`),
/// matching the document format of the web editor.
pub type EffectParams = BTreeMap<String, ParamValue>;

/// Concrete parameter value.
///
/// Untagged: the JSON representation is the bare value. Variant order matters
/// for deserialization — `Int` must precede `Float` so `8` parses as an
/// integer and `8.5` as a float, and `Vec2` must precede `Color` so array
/// length disambiguates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2([f32; 2]),
    Color([f32; 4]),
    Text(String),
}

impl ParamValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<[f32; 2]> {
        match self {
            Self::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<[f32; 4]> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// Parameter definition for an effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamDef {
    pub name: String,
    pub display_name: String,
    pub param_type: ParamType,
    pub default: ParamValue,
}

impl ParamDef {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        param_type: ParamType,
        default: ParamValue,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            param_type,
            default,
        }
    }
}

/// Parameter type with constraints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamType {
    Float { min: f32, max: f32 },
    Int { min: i32, max: i32 },
    Bool,
    Color,
    Vec2,
    Select { options: Vec<String> },
}

/// Build an [`EffectParams`] map from a list of parameter definitions,
/// taking each definition's default value.
pub fn params_from_defaults(defs: &[ParamDef]) -> EffectParams {
    defs.iter()
        .map(|d| (d.name.clone(), d.default.clone()))
        .collect()
}
