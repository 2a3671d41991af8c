//! Parameter validation and conversion helpers.

use hs_common::{EffectParams, ParamDef, ParamType, ParamValue};

use crate::error::EffectError;

/// Validate parameter values against their definitions.
///
/// Checks that:
/// - Every supplied parameter has a matching definition
/// - Float/Int values are within their defined ranges
/// - Select values are one of the defined options
/// - Value types match the parameter type
pub fn validate_params(defs: &[ParamDef], params: &EffectParams) -> Result<(), EffectError> {
    for (name, value) in params {
        let def = defs
            .iter()
            .find(|d| d.name == *name)
            .ok_or_else(|| EffectError::UnknownParam {
                param: name.clone(),
            })?;

        validate_single_param(def, value)?;
    }
    Ok(())
}

/// Validate a single parameter value against its definition.
fn validate_single_param(def: &ParamDef, value: &ParamValue) -> Result<(), EffectError> {
    match (&def.param_type, value) {
        (ParamType::Float { min, max }, ParamValue::Float(v)) => {
            if *v < *min || *v > *max {
                return Err(out_of_range(def, v, min, max));
            }
        }
        // Integers are accepted where floats are expected (JSON numbers
        // without a decimal point deserialize as Int).
        (ParamType::Float { min, max }, ParamValue::Int(v)) => {
            let v = *v as f32;
            if v < *min || v > *max {
                return Err(out_of_range(def, &v, min, max));
            }
        }
        (ParamType::Int { min, max }, ParamValue::Int(v)) => {
            if *v < *min || *v > *max {
                return Err(out_of_range(def, v, min, max));
            }
        }
        (ParamType::Bool, ParamValue::Bool(_)) => {}
        (ParamType::Color, ParamValue::Color(_)) => {}
        (ParamType::Vec2, ParamValue::Vec2(_)) => {}
        (ParamType::Select { options }, ParamValue::Text(v)) => {
            if !options.iter().any(|o| o == v) {
                return Err(EffectError::ParamOutOfRange {
                    param: def.name.clone(),
                    value: v.clone(),
                    min: options.first().cloned().unwrap_or_default(),
                    max: options.last().cloned().unwrap_or_default(),
                });
            }
        }
        _ => {
            return Err(EffectError::ParamTypeMismatch {
                param: def.name.clone(),
                expected: format!("{:?}", def.param_type),
                got: format!("{value:?}"),
            });
        }
    }
    Ok(())
}

fn out_of_range(
    def: &ParamDef,
    value: &impl std::fmt::Display,
    min: &impl std::fmt::Display,
    max: &impl std::fmt::Display,
) -> EffectError {
    EffectError::ParamOutOfRange {
        param: def.name.clone(),
        value: format!("{value}"),
        min: format!("{min}"),
        max: format!("{max}"),
    }
}

/// Get a parameter value from the supplied params, falling back to the default.
///
/// Returns `None` only if the parameter name is not found in either `params` or `defs`.
pub fn get_param_or_default<'a>(
    name: &str,
    params: &'a EffectParams,
    defs: &'a [ParamDef],
) -> Option<&'a ParamValue> {
    if let Some(val) = params.get(name) {
        return Some(val);
    }
    defs.iter().find(|d| d.name == name).map(|d| &d.default)
}

/// Helper to extract a float parameter, with fallback to default.
pub fn get_float(name: &str, params: &EffectParams, defs: &[ParamDef]) -> f32 {
    get_param_or_default(name, params, defs)
        .and_then(|v| v.as_float())
        .unwrap_or(0.0)
}

/// Helper to extract an int parameter, with fallback to default.
pub fn get_int(name: &str, params: &EffectParams, defs: &[ParamDef]) -> i32 {
    get_param_or_default(name, params, defs)
        .and_then(|v| v.as_int())
        .unwrap_or(0)
}

/// Helper to extract a bool parameter, with fallback to default.
pub fn get_bool(name: &str, params: &EffectParams, defs: &[ParamDef]) -> bool {
    get_param_or_default(name, params, defs)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Helper to extract a color parameter, with fallback to default.
pub fn get_color(name: &str, params: &EffectParams, defs: &[ParamDef]) -> [f32; 4] {
    get_param_or_default(name, params, defs)
        .and_then(|v| v.as_color())
        .unwrap_or([0.0, 0.0, 0.0, 1.0])
}

/// Helper to extract a 2-vector parameter, with fallback to default.
pub fn get_vec2(name: &str, params: &EffectParams, defs: &[ParamDef]) -> [f32; 2] {
    get_param_or_default(name, params, defs)
        .and_then(|v| v.as_vec2())
        .unwrap_or([0.0, 0.0])
}

/// Helper to extract a text parameter, with fallback to default.
pub fn get_text<'a>(name: &str, params: &'a EffectParams, defs: &'a [ParamDef]) -> &'a str {
    get_param_or_default(name, params, defs)
        .and_then(|v| v.as_text())
        .unwrap_or("")
}
