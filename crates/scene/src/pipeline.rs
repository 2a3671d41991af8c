//! Modifier pipeline operations.
//!
//! Ordered-list operations scoped to a single processor node's `modifiers`
//! array. Like the tree operations these are pure: they take the current
//! pipeline and return a new one. Out-of-range indices are structural no-ops,
//! never panics.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use hs_common::{EffectParams, EffectTypeId, LayerNode, Modifier};

use crate::error::{SceneError, SceneResult};

/// Append an effect entry to the pipeline.
///
/// `params: None` takes the registry defaults for the effect type. Duplicate
/// ids are allowed and independent — each entry carries its own params.
pub fn add_effect(
    pipeline: &[Modifier],
    id: EffectTypeId,
    params: Option<EffectParams>,
) -> Vec<Modifier> {
    let params =
        params.unwrap_or_else(|| hs_effects::builtin_registry().definition(id).default_params());
    let mut out = pipeline.to_vec();
    out.push(Modifier::effect(id, params));
    out
}

/// Remove the entry at `index`. Out-of-range index returns the input
/// unchanged.
pub fn remove_modifier_at(pipeline: &[Modifier], index: usize) -> Vec<Modifier> {
    if index >= pipeline.len() {
        return pipeline.to_vec();
    }
    let mut out = pipeline.to_vec();
    out.remove(index);
    out
}

/// Shallow-merge `partial` onto the params of the effect entry at `index`.
///
/// Other entries are untouched. A no-op when the index is out of range or the
/// entry is a mask.
pub fn update_effect_at(
    pipeline: &[Modifier],
    index: usize,
    partial: &EffectParams,
) -> Vec<Modifier> {
    let mut out = pipeline.to_vec();
    if let Some(Modifier::Effect { params, .. }) = out.get_mut(index) {
        for (name, value) in partial {
            params.insert(name.clone(), value.clone());
        }
    }
    out
}

/// Move the entry at `from` to position `to`.
///
/// `from == to` and out-of-range indices are no-ops that still return a value
/// structurally equal to the input. The result is always a permutation of the
/// input.
pub fn reorder_modifiers(pipeline: &[Modifier], from: usize, to: usize) -> Vec<Modifier> {
    let mut out = pipeline.to_vec();
    if from == to || from >= out.len() || to >= out.len() {
        return out;
    }
    let entry = out.remove(from);
    out.insert(to, entry);
    out
}

/// Replace the whole pipeline.
pub fn set_modifier_pipeline(pipeline: Vec<Modifier>) -> Vec<Modifier> {
    pipeline
}

/// An empty pipeline.
pub fn clear_modifiers() -> Vec<Modifier> {
    Vec::new()
}

/// Where a dragged modifier chip should land when moved from one processor
/// node to another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierDropPosition {
    pub source_layer_id: String,
    pub source_index: usize,
    pub target_layer_id: String,
    pub target_index: usize,
}

/// Move a modifier between two processor nodes' pipelines.
///
/// Deliberately unimplemented: the drop-position type exists so the UI
/// surface can be wired, but the move semantics (what happens to a mask
/// bracketing different target content, how indices clamp) are not defined
/// yet. This is not the same operation as [`reorder_modifiers`] within one
/// pipeline.
pub fn move_modifier_between_layers(
    _tree: &[Arc<LayerNode>],
    drop: &ModifierDropPosition,
) -> SceneResult<Vec<Arc<LayerNode>>> {
    warn!(
        source = %drop.source_layer_id,
        target = %drop.target_layer_id,
        "Cross-layer modifier move requested but not implemented"
    );
    Err(SceneError::ModifierMoveUnsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_common::{MaskShapeConfig, ParamValue, SurfaceConfig};

    fn params(entries: &[(&str, ParamValue)]) -> EffectParams {
        entries
            .iter()
            .map(|(n, v)| (n.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn add_effect_appends() {
        // Scenario B: blur then vignette, in insertion order.
        let p1 = add_effect(
            &[],
            EffectTypeId::Blur,
            Some(params(&[("radius", ParamValue::Int(8))])),
        );
        let p2 = add_effect(
            &p1,
            EffectTypeId::Vignette,
            Some(params(&[("intensity", ParamValue::Float(0.5))])),
        );

        assert_eq!(p2.len(), 2);
        assert_eq!(p2[0].effect_type(), Some(EffectTypeId::Blur));
        assert_eq!(
            p2[0].effect_params().unwrap()["radius"],
            ParamValue::Int(8)
        );
        assert_eq!(p2[1].effect_type(), Some(EffectTypeId::Vignette));
        assert_eq!(
            p2[1].effect_params().unwrap()["intensity"],
            ParamValue::Float(0.5)
        );

        let reordered = reorder_modifiers(&p2, 0, 1);
        assert_eq!(reordered[0].effect_type(), Some(EffectTypeId::Vignette));
        assert_eq!(reordered[1].effect_type(), Some(EffectTypeId::Blur));
    }

    #[test]
    fn add_effect_without_params_takes_registry_defaults() {
        let pipeline = add_effect(&[], EffectTypeId::Blur, None);
        let params = pipeline[0].effect_params().unwrap();
        assert_eq!(params["radius"], ParamValue::Float(8.0));
        assert_eq!(params["quality"], ParamValue::Int(2));
    }

    #[test]
    fn duplicate_effect_ids_are_independent() {
        let p = add_effect(&[], EffectTypeId::Blur, Some(params(&[("radius", ParamValue::Int(4))])));
        let p = add_effect(&p, EffectTypeId::Blur, Some(params(&[("radius", ParamValue::Int(16))])));
        assert_eq!(p.len(), 2);
        assert_eq!(p[0].effect_params().unwrap()["radius"], ParamValue::Int(4));
        assert_eq!(p[1].effect_params().unwrap()["radius"], ParamValue::Int(16));
    }

    #[test]
    fn remove_modifier_in_range() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let p = add_effect(&p, EffectTypeId::Vignette, None);
        let removed = remove_modifier_at(&p, 0);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].effect_type(), Some(EffectTypeId::Vignette));
    }

    #[test]
    fn remove_modifier_out_of_range_is_noop() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let removed = remove_modifier_at(&p, 5);
        assert_eq!(removed, p);
        let removed = remove_modifier_at(&[], 0);
        assert!(removed.is_empty());
    }

    #[test]
    fn update_effect_merges_shallowly() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let updated = update_effect_at(&p, 0, &params(&[("radius", ParamValue::Float(24.0))]));
        let merged = updated[0].effect_params().unwrap();
        assert_eq!(merged["radius"], ParamValue::Float(24.0));
        // Untouched params survive the merge
        assert_eq!(merged["quality"], ParamValue::Int(2));
    }

    #[test]
    fn update_effect_out_of_range_is_noop() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let updated = update_effect_at(&p, 3, &params(&[("radius", ParamValue::Float(24.0))]));
        assert_eq!(updated, p);
    }

    #[test]
    fn update_effect_skips_mask_entries() {
        let p = vec![Modifier::mask(MaskShapeConfig::default())];
        let updated = update_effect_at(&p, 0, &params(&[("radius", ParamValue::Float(24.0))]));
        assert_eq!(updated, p);
    }

    #[test]
    fn reorder_is_a_permutation() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let p = add_effect(&p, EffectTypeId::Vignette, None);
        let p = add_effect(&p, EffectTypeId::DotHalftone, None);

        for from in 0..p.len() {
            for to in 0..p.len() {
                let reordered = reorder_modifiers(&p, from, to);
                assert_eq!(reordered.len(), p.len());
                for entry in &p {
                    assert!(reordered.contains(entry));
                }
            }
        }
    }

    #[test]
    fn reorder_equal_indices_is_structural_noop() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let p = add_effect(&p, EffectTypeId::Vignette, None);
        assert_eq!(reorder_modifiers(&p, 1, 1), p);
        assert_eq!(reorder_modifiers(&p, 5, 0), p);
        assert_eq!(reorder_modifiers(&p, 0, 5), p);
    }

    #[test]
    fn set_and_clear() {
        let p = add_effect(&[], EffectTypeId::Blur, None);
        let replaced = set_modifier_pipeline(p.clone());
        assert_eq!(replaced, p);
        assert!(clear_modifiers().is_empty());
    }

    #[test]
    fn cross_layer_move_is_explicitly_unsupported() {
        let tree = vec![Arc::new(LayerNode::surface(
            "s1",
            "s1",
            SurfaceConfig::default(),
        ))];
        let drop = ModifierDropPosition {
            source_layer_id: "p1".into(),
            source_index: 0,
            target_layer_id: "p2".into(),
            target_index: 0,
        };
        let err = move_modifier_between_layers(&tree, &drop).unwrap_err();
        assert_eq!(err, SceneError::ModifierMoveUnsupported);
    }

    #[test]
    fn modifier_drop_position_serde() {
        let drop = ModifierDropPosition {
            source_layer_id: "p1".into(),
            source_index: 1,
            target_layer_id: "p2".into(),
            target_index: 0,
        };
        let json = serde_json::to_string(&drop).unwrap();
        assert!(json.contains("sourceLayerId"));
        assert!(json.contains("targetIndex"));
        let back: ModifierDropPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, drop);
    }
}
