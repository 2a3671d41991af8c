//! `hs-effects` — Effect-type registry, parameter schemas, and shader-spec builders.
//!
//! This crate provides:
//! - The [`EffectDefinition`] trait that all effect types implement
//! - An [`EffectRegistry`] mapping each [`EffectTypeId`](hs_common::EffectTypeId)
//!   to its parameter schema, default config, and shader-spec builder
//! - Parameter validation and conversion helpers
//! - The five built-in effects:
//!   - Vignette (shape-parameterized: ellipse / circle / rectangle / linear)
//!   - Chromatic Aberration
//!   - Dot Halftone
//!   - Line Halftone
//!   - Blur

pub mod blur;
pub mod chromatic;
pub mod error;
pub mod halftone;
pub mod params;
pub mod registry;
pub mod traits;
pub mod vignette;

// Re-export primary types at crate root.
pub use blur::BlurEffect;
pub use chromatic::ChromaticAberrationEffect;
pub use error::EffectError;
pub use halftone::{DotHalftoneEffect, LineHalftoneEffect};
pub use params::{get_param_or_default, validate_params};
pub use registry::{builtin_registry, is_valid_effect_type, EffectRegistry};
pub use traits::EffectDefinition;
pub use vignette::{VignetteEffect, VignetteShape};
