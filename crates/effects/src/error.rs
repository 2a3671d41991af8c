//! Effect-specific error types.

use thiserror::Error;

/// Errors from the effect system.
#[derive(Error, Debug)]
pub enum EffectError {
    /// An externally-sourced effect identifier is not in the known set.
    #[error("Unknown effect type: {name}")]
    UnknownEffectType { name: String },

    /// An unknown parameter name was supplied.
    #[error("Unknown parameter: {param}")]
    UnknownParam { param: String },

    /// A parameter value is outside its valid range.
    #[error("Parameter '{param}' value {value} out of range [{min}, {max}]")]
    ParamOutOfRange {
        param: String,
        value: String,
        min: String,
        max: String,
    },

    /// A parameter value has the wrong type.
    #[error("Parameter '{param}' type mismatch: expected {expected}, got {got}")]
    ParamTypeMismatch {
        param: String,
        expected: String,
        got: String,
    },
}
