//! Legacy exclusive-effect config migration.
//!
//! Older documents stored a processor's effects as one flat struct with a
//! boolean-enabled slot per effect type (at most one enabled in practice,
//! though nothing enforced it). The canonical form is an ordered pipeline of
//! effect entries; absence means disabled — there is no "disabled pipeline
//! entry".
//!
//! Migration is one-directional-safe only from legacy to canonical. The
//! reverse direction is lossy once a pipeline carries the same effect id
//! twice: only the first occurrence per id survives, later ones are dropped
//! (logged, never an error).

use serde::{Deserialize, Serialize};
use tracing::warn;

use hs_common::{EffectParams, EffectTypeId, Modifier};
use hs_effects::builtin_registry;

/// One slot of the legacy flat effect config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyEffectSlot {
    #[serde(default)]
    pub enabled: bool,
    /// All remaining slot fields, preserved verbatim.
    #[serde(flatten)]
    pub params: EffectParams,
}

/// The legacy flat per-type effect map: one optional slot per effect type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEffectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vignette: Option<LegacyEffectSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromatic_aberration: Option<LegacyEffectSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_halftone: Option<LegacyEffectSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_halftone: Option<LegacyEffectSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<LegacyEffectSlot>,
}

impl LegacyEffectConfig {
    fn slot(&self, id: EffectTypeId) -> Option<&LegacyEffectSlot> {
        match id {
            EffectTypeId::Vignette => self.vignette.as_ref(),
            EffectTypeId::ChromaticAberration => self.chromatic_aberration.as_ref(),
            EffectTypeId::DotHalftone => self.dot_halftone.as_ref(),
            EffectTypeId::LineHalftone => self.line_halftone.as_ref(),
            EffectTypeId::Blur => self.blur.as_ref(),
        }
    }

    fn slot_mut(&mut self, id: EffectTypeId) -> &mut Option<LegacyEffectSlot> {
        match id {
            EffectTypeId::Vignette => &mut self.vignette,
            EffectTypeId::ChromaticAberration => &mut self.chromatic_aberration,
            EffectTypeId::DotHalftone => &mut self.dot_halftone,
            EffectTypeId::LineHalftone => &mut self.line_halftone,
            EffectTypeId::Blur => &mut self.blur,
        }
    }
}

/// Convert a legacy flat effect config into a canonical pipeline.
///
/// Iterates the slots in registry order, emitting one effect entry per
/// `enabled: true` slot with its non-`enabled` parameters preserved verbatim.
/// Disabled slots are not represented in the output.
pub fn migrate_legacy_effect_config(legacy: &LegacyEffectConfig) -> Vec<Modifier> {
    let mut pipeline = Vec::new();
    for id in EffectTypeId::REGISTRY_ORDER {
        if let Some(slot) = legacy.slot(id) {
            if slot.enabled {
                pipeline.push(Modifier::effect(id, slot.params.clone()));
            }
        }
    }
    pipeline
}

/// Convert a canonical pipeline back to the legacy flat shape.
///
/// Every slot starts disabled with the registry's default params. The first
/// pipeline entry per effect id sets its slot `enabled: true` and replaces
/// the params; later entries with the same id are dropped — documented loss,
/// not an error. Mask entries have no legacy representation and are skipped.
pub fn to_legacy_effect_config(pipeline: &[Modifier]) -> LegacyEffectConfig {
    let registry = builtin_registry();
    let mut legacy = LegacyEffectConfig::default();
    for id in EffectTypeId::REGISTRY_ORDER {
        *legacy.slot_mut(id) = Some(LegacyEffectSlot {
            enabled: false,
            params: registry.definition(id).default_params(),
        });
    }

    for modifier in pipeline {
        let Modifier::Effect { id, params } = modifier else {
            continue;
        };
        let slot = legacy.slot_mut(*id);
        if matches!(slot, Some(s) if s.enabled) {
            warn!(
                effect = %id,
                "Pipeline carries a duplicate effect id; dropping later occurrence in legacy config"
            );
            continue;
        }
        *slot = Some(LegacyEffectSlot {
            enabled: true,
            params: params.clone(),
        });
    }

    legacy
}
