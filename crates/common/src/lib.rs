//! `hs-common` — Shared data model for the HeroStage document core.
//!
//! This crate is the foundation that the other core crates depend on.
//! It defines the document's data types and nothing else — no algorithms,
//! no I/O:
//!
//! - **Nodes**: `LayerNode`, `LayerContent`, `ModelTransform` (the recursive layer tree)
//! - **Modifiers**: `Modifier`, `EffectTypeId` (processor pipeline entries)
//! - **Surfaces**: `SurfaceConfig`, `MaskShapeConfig` (canonical tagged configs)
//! - **Parameters**: `ParamValue`, `ParamDef`, `ParamType`, `EffectParams` (effect schemas)
//! - **Shaders**: `ShaderId`, `ShaderArgs`, `ShaderSpec`, `Viewport` (renderer boundary)
//! - **Foreground**: `ForegroundElementConfig`, `ColorsConfig`, `CanvasSettings`

pub mod foreground;
pub mod modifier;
pub mod node;
pub mod param;
pub mod shader;
pub mod surface;

// Re-export commonly used items at crate root
pub use foreground::{
    CanvasSettings, ColorsConfig, ForegroundConfig, ForegroundElementConfig,
    ForegroundElementKind, ForegroundElementPatch,
};
pub use modifier::{EffectTypeId, Modifier};
pub use node::{LayerContent, LayerNode, ModelTransform};
pub use param::{params_from_defaults, EffectParams, ParamDef, ParamType, ParamValue};
pub use shader::{ShaderArg, ShaderArgs, ShaderId, ShaderSpec, Viewport};
pub use surface::{GradientStop, ImageFit, MaskShapeConfig, SurfaceConfig};
