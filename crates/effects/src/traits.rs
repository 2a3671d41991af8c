//! Effect definition trait.
//!
//! Every effect type registers one [`EffectDefinition`]: its parameter
//! schema, a default-config factory, and a shader-spec builder. The actual
//! GPU execution is performed by the external renderer consuming the
//! [`ShaderSpec`](hs_common::ShaderSpec).

use hs_common::{params_from_defaults, EffectParams, EffectTypeId, ParamDef, ShaderSpec, Viewport};

/// Trait for all effect types.
///
/// The core guarantees that any `params` passed to [`shader_spec`] matches
/// the shape [`default_params`] produces, merged with partial updates applied
/// through the pipeline operations — implementations read params through the
/// default-falling-back helpers and never need to validate shape.
///
/// [`shader_spec`]: EffectDefinition::shader_spec
/// [`default_params`]: EffectDefinition::default_params
pub trait EffectDefinition: Send + Sync + std::fmt::Debug {
    /// The effect type this definition backs.
    fn effect_type(&self) -> EffectTypeId;

    /// Display name for UI.
    fn display_name(&self) -> &str;

    /// Parameter definitions (for UI generation and validation).
    fn param_defs(&self) -> &[ParamDef];

    /// A fully-populated default configuration for this effect.
    fn default_params(&self) -> EffectParams {
        params_from_defaults(self.param_defs())
    }

    /// Build the shader dispatch spec for the given params.
    ///
    /// `viewport` is the render target size in physical pixels and `scale`
    /// the preview scale factor applied to pixel-space parameters. Returns
    /// `None` when the effect is a no-op at these params (the renderer skips
    /// the pass entirely).
    fn shader_spec(&self, params: &EffectParams, viewport: Viewport, scale: f32)
        -> Option<ShaderSpec>;
}
