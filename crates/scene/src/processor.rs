//! Processor targeting queries.
//!
//! A processor node's pipeline applies to the sibling layers that precede it
//! within the same parent: every non-processor sibling from the previous
//! processor (or the start of the children array) up to the processor itself.
//! A sibling group counts as a single target item — processors never reach
//! inside it.
//!
//! These queries exist so the UI can draw a bracket from the affected
//! siblings down to their processor:
//! [`has_processor_below`] answers "is this row inside some bracket",
//! [`is_processor_target`] answers "is this row the one the bracket attaches
//! from" (the nearest preceding target).

use std::sync::Arc;

use hs_common::LayerNode;

/// Whether the node at `index` is the nearest preceding target of a
/// processor, i.e. a non-processor whose immediate next sibling is a
/// processor.
///
/// Out-of-range indices and processor rows yield `false`.
pub fn is_processor_target(siblings: &[Arc<LayerNode>], index: usize) -> bool {
    let Some(node) = siblings.get(index) else {
        return false;
    };
    if node.is_processor() {
        return false;
    }
    matches!(siblings.get(index + 1), Some(next) if next.is_processor())
}

/// Whether some later sibling processor still applies to the node at `index`.
///
/// True for any non-processor row with at least one processor somewhere below
/// it in the same sibling array. Out-of-range indices and processor rows
/// yield `false`.
pub fn has_processor_below(siblings: &[Arc<LayerNode>], index: usize) -> bool {
    let Some(node) = siblings.get(index) else {
        return false;
    };
    if node.is_processor() {
        return false;
    }
    siblings[index + 1..].iter().any(|n| n.is_processor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_common::{MaskShapeConfig, Modifier, SurfaceConfig};

    fn surface(id: &str) -> Arc<LayerNode> {
        Arc::new(LayerNode::surface(id, id, SurfaceConfig::default()))
    }

    fn processor(id: &str) -> Arc<LayerNode> {
        Arc::new(LayerNode::processor(
            id,
            id,
            vec![Modifier::mask(MaskShapeConfig::default())],
        ))
    }

    fn group(id: &str, children: Vec<Arc<LayerNode>>) -> Arc<LayerNode> {
        Arc::new(LayerNode::group(id, id, children))
    }

    #[test]
    fn scenario_surface_then_processor() {
        // Scenario A: main group holds [Surface(s2), Processor(pr)].
        let children = vec![surface("s2"), processor("pr")];
        assert!(is_processor_target(&children, 0));
        assert!(has_processor_below(&children, 0));
        // The processor row itself is neither
        assert!(!is_processor_target(&children, 1));
        assert!(!has_processor_below(&children, 1));
    }

    #[test]
    fn processor_with_no_preceding_siblings_targets_nothing() {
        let children = vec![processor("pr"), surface("s1")];
        assert!(!is_processor_target(&children, 0));
        assert!(!has_processor_below(&children, 0));
        // s1 follows the processor: nothing below applies to it
        assert!(!is_processor_target(&children, 1));
        assert!(!has_processor_below(&children, 1));
    }

    #[test]
    fn multiple_processors_bracket_disjoint_ranges() {
        // [s0, s1, p2, s3, p4]: p2 targets {s0, s1}, p4 targets {s3}.
        let children = vec![
            surface("s0"),
            surface("s1"),
            processor("p2"),
            surface("s3"),
            processor("p4"),
        ];
        assert!(has_processor_below(&children, 0));
        assert!(!is_processor_target(&children, 0)); // s1 sits between s0 and p2
        assert!(is_processor_target(&children, 1));
        assert!(is_processor_target(&children, 3));
        assert!(has_processor_below(&children, 3));
    }

    #[test]
    fn group_counts_as_single_target() {
        // The group is a target item; the processor does not reach inside it.
        let inner = vec![surface("s1")];
        let children = vec![group("g1", inner.clone()), processor("pr")];
        assert!(is_processor_target(&children, 0));
        assert!(has_processor_below(&children, 0));
        // Inside the group there is no processor below
        assert!(!has_processor_below(&inner, 0));
        assert!(!is_processor_target(&inner, 0));
    }

    #[test]
    fn out_of_range_index_is_false() {
        let children = vec![surface("s0"), processor("p1")];
        assert!(!is_processor_target(&children, 5));
        assert!(!has_processor_below(&children, 5));
        assert!(!is_processor_target(&[], 0));
        assert!(!has_processor_below(&[], 0));
    }
}
