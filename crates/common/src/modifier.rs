//! Modifier definitions — the effect/mask entries of a processor pipeline.

use serde::{Deserialize, Serialize};

use crate::param::EffectParams;
use crate::surface::MaskShapeConfig;

/// Closed set of effect type identifiers.
///
/// Every variant is backed by exactly one registry entry in `hs-effects`.
/// `REGISTRY_ORDER` is the stable declaration order used when migrating
/// legacy exclusive-effect configs into pipeline form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectTypeId {
    Vignette,
    ChromaticAberration,
    DotHalftone,
    LineHalftone,
    Blur,
}

impl EffectTypeId {
    /// Registry declaration order. Migration emits pipeline entries in this
    /// order regardless of legacy struct field order.
    pub const REGISTRY_ORDER: [EffectTypeId; 5] = [
        EffectTypeId::Vignette,
        EffectTypeId::ChromaticAberration,
        EffectTypeId::DotHalftone,
        EffectTypeId::LineHalftone,
        EffectTypeId::Blur,
    ];

    /// The serialized identifier for this effect type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vignette => "vignette",
            Self::ChromaticAberration => "chromaticAberration",
            Self::DotHalftone => "dotHalftone",
            Self::LineHalftone => "lineHalftone",
            Self::Blur => "blur",
        }
    }

    /// Parse an untrusted identifier (e.g. loaded from a document file).
    ///
    /// Returns `None` for unknown identifiers; this is the validation step
    /// that must precede any registry lookup on external input.
    pub fn parse(s: &str) -> Option<EffectTypeId> {
        Self::REGISTRY_ORDER.iter().copied().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for EffectTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in a processor node's modifier pipeline.
///
/// Pipeline order is execution order: index 0 applies first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Modifier {
    /// A single effect instance. The same `id` may appear more than once in a
    /// pipeline; each entry carries its own params.
    Effect {
        id: EffectTypeId,
        params: EffectParams,
    },
    /// A shape mask applied to the processor's target content.
    Mask {
        enabled: bool,
        shape: MaskShapeConfig,
        invert: bool,
        feather: f32,
    },
}

impl Modifier {
    /// New effect entry with the given params.
    pub fn effect(id: EffectTypeId, params: EffectParams) -> Self {
        Self::Effect { id, params }
    }

    /// New mask entry with default flags (enabled, not inverted, no feather).
    pub fn mask(shape: MaskShapeConfig) -> Self {
        Self::Mask {
            enabled: true,
            shape,
            invert: false,
            feather: 0.0,
        }
    }

    pub fn is_effect(&self) -> bool {
        match self {
            Self::Effect { .. } => true,
            Self::Mask { .. } => false,
        }
    }

    pub fn is_mask(&self) -> bool {
        match self {
            Self::Effect { .. } => false,
            Self::Mask { .. } => true,
        }
    }

    /// The effect type id, if this entry is an effect.
    pub fn effect_type(&self) -> Option<EffectTypeId> {
        match self {
            Self::Effect { id, .. } => Some(*id),
            Self::Mask { .. } => None,
        }
    }

    /// The effect params, if this entry is an effect.
    pub fn effect_params(&self) -> Option<&EffectParams> {
        match self {
            Self::Effect { params, .. } => Some(params),
            Self::Mask { .. } => None,
        }
    }
}
