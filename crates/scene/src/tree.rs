//! Layer-tree operations.
//!
//! All functions are pure and path-copying: they take the current layer
//! forest (`&[Arc<LayerNode>]`) and return a new one. Only the path from the
//! root to the affected node is reallocated; every subtree off that path is
//! shared with the input by pointer, which is what external change detection
//! and the undo stack rely on.
//!
//! Unknown ids are structural no-ops for find/update/remove. Mutations that
//! would corrupt the tree (cycles, `into` a non-group) are rejected with a
//! [`SceneError`] — callers that want to pre-check use
//! [`can_move_layer_in_tree`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use hs_common::{LayerContent, LayerNode, MaskShapeConfig, Modifier};

use crate::error::{SceneError, SceneResult};

/// Where a dragged layer should land, relative to an existing target layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DropPosition {
    /// Insert as the sibling immediately before the target.
    Before { target_id: String },
    /// Insert as the sibling immediately after the target.
    After { target_id: String },
    /// Append as the last child of the target group.
    Into { target_id: String },
}

impl DropPosition {
    pub fn before(target_id: impl Into<String>) -> Self {
        Self::Before {
            target_id: target_id.into(),
        }
    }

    pub fn after(target_id: impl Into<String>) -> Self {
        Self::After {
            target_id: target_id.into(),
        }
    }

    pub fn into_group(target_id: impl Into<String>) -> Self {
        Self::Into {
            target_id: target_id.into(),
        }
    }

    pub fn target_id(&self) -> &str {
        match self {
            Self::Before { target_id } | Self::After { target_id } | Self::Into { target_id } => {
                target_id
            }
        }
    }
}

/// Depth-first, pre-order search for the first node with `id`.
///
/// Ids are unique within a document, so "first" never matters in practice,
/// but the traversal order is fixed for determinism.
pub fn find_layer_in_tree<'a>(tree: &'a [Arc<LayerNode>], id: &str) -> Option<&'a Arc<LayerNode>> {
    for node in tree {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children() {
            if let Some(found) = find_layer_in_tree(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Find the group that directly contains `id`.
///
/// Returns `None` both when `id` is a root-level node and when `id` does not
/// exist — callers needing to disambiguate check [`find_layer_in_tree`] first.
pub fn find_parent_layer_in_tree<'a>(
    tree: &'a [Arc<LayerNode>],
    id: &str,
) -> Option<&'a Arc<LayerNode>> {
    for node in tree {
        if let Some(children) = node.children() {
            if children.iter().any(|child| child.id == id) {
                return Some(node);
            }
            if let Some(parent) = find_parent_layer_in_tree(children, id) {
                return Some(parent);
            }
        }
    }
    None
}

/// Whether `id` names a node strictly inside `node`'s subtree.
pub fn is_descendant(node: &LayerNode, id: &str) -> bool {
    match node.children() {
        Some(children) => find_layer_in_tree(children, id).is_some(),
        None => false,
    }
}

/// Pre-order listing of every node in the forest.
pub fn flatten_layers_in_tree(tree: &[Arc<LayerNode>]) -> Vec<Arc<LayerNode>> {
    let mut out = Vec::new();
    flatten_into(tree, &mut out);
    out
}

fn flatten_into(tree: &[Arc<LayerNode>], out: &mut Vec<Arc<LayerNode>>) {
    for node in tree {
        out.push(Arc::clone(node));
        if let Some(children) = node.children() {
            flatten_into(children, out);
        }
    }
}

/// Rebuild a group node with a new children sequence.
///
/// Only meaningful for group nodes; callers guarantee `node.is_group()`.
fn with_children(node: &LayerNode, children: Vec<Arc<LayerNode>>) -> Arc<LayerNode> {
    let mut copy = node.clone();
    copy.content = LayerContent::Group { children };
    Arc::new(copy)
}

/// Apply `update` to the node with `id`, path-copying from the root.
///
/// Siblings off the root-to-target path are returned by pointer, untouched.
/// Unknown id is a structural no-op: the result is pointer-identical to the
/// input, element for element.
pub fn update_layer_in_tree<F>(tree: &[Arc<LayerNode>], id: &str, update: F) -> Vec<Arc<LayerNode>>
where
    F: FnOnce(&mut LayerNode),
{
    let mut update = Some(update);
    update_recursive(tree, id, &mut update)
}

fn update_recursive<F>(
    tree: &[Arc<LayerNode>],
    id: &str,
    update: &mut Option<F>,
) -> Vec<Arc<LayerNode>>
where
    F: FnOnce(&mut LayerNode),
{
    tree.iter()
        .map(|node| {
            if update.is_none() {
                return Arc::clone(node);
            }
            if node.id == id {
                if let Some(f) = update.take() {
                    let mut copy = (**node).clone();
                    f(&mut copy);
                    // The update must not change identity.
                    copy.id = node.id.clone();
                    return Arc::new(copy);
                }
            }
            if let Some(children) = node.children() {
                let new_children = update_recursive(children, id, update);
                if update.is_none() {
                    return with_children(node, new_children);
                }
            }
            Arc::clone(node)
        })
        .collect()
}

/// Remove the first node with `id`, wherever it sits in the forest.
///
/// Removing a group removes its entire subtree. Unknown id is a no-op, not an
/// error.
pub fn remove_layer_from_tree(tree: &[Arc<LayerNode>], id: &str) -> Vec<Arc<LayerNode>> {
    remove_first(tree, id).0
}

fn remove_first(
    tree: &[Arc<LayerNode>],
    id: &str,
) -> (Vec<Arc<LayerNode>>, Option<Arc<LayerNode>>) {
    let mut removed = None;
    let mut out = Vec::with_capacity(tree.len());
    for node in tree {
        if removed.is_some() {
            out.push(Arc::clone(node));
            continue;
        }
        if node.id == id {
            removed = Some(Arc::clone(node));
            continue;
        }
        if let Some(children) = node.children() {
            let (new_children, found) = remove_first(children, id);
            if found.is_some() {
                removed = found;
                out.push(with_children(node, new_children));
                continue;
            }
        }
        out.push(Arc::clone(node));
    }
    (out, removed)
}

/// Validate a prospective move without applying it.
fn validate_move(
    tree: &[Arc<LayerNode>],
    node_id: &str,
    position: &DropPosition,
) -> SceneResult<()> {
    let node = find_layer_in_tree(tree, node_id).ok_or_else(|| SceneError::UnknownLayer {
        id: node_id.to_string(),
    })?;
    let target_id = position.target_id();
    if target_id == node_id {
        return Err(SceneError::SelfTarget {
            id: node_id.to_string(),
        });
    }
    let target = find_layer_in_tree(tree, target_id).ok_or_else(|| SceneError::UnknownTarget {
        id: target_id.to_string(),
    })?;
    if is_descendant(node, target_id) {
        return Err(SceneError::CycleMove {
            id: node_id.to_string(),
            target_id: target_id.to_string(),
        });
    }
    if matches!(position, DropPosition::Into { .. }) && !target.is_group() {
        return Err(SceneError::IntoNonGroup {
            id: target_id.to_string(),
        });
    }
    Ok(())
}

/// The pure predicate the UI calls on every pointer move during a drag.
///
/// False for: unknown node, unknown target, `into` a non-group, the target
/// being the node itself, or the target lying inside the node's subtree.
/// [`move_layer_in_tree`] re-validates the same conditions, so the predicate
/// and the mutator can never disagree.
pub fn can_move_layer_in_tree(
    tree: &[Arc<LayerNode>],
    node_id: &str,
    position: &DropPosition,
) -> bool {
    validate_move(tree, node_id, position).is_ok()
}

/// Remove the node and reinsert it relative to the target.
///
/// Rejects invalid positions with a descriptive error instead of corrupting
/// the tree; the result is all-or-nothing.
pub fn move_layer_in_tree(
    tree: &[Arc<LayerNode>],
    node_id: &str,
    position: &DropPosition,
) -> SceneResult<Vec<Arc<LayerNode>>> {
    validate_move(tree, node_id, position)?;

    let (without, removed) = remove_first(tree, node_id);
    let node = removed.ok_or_else(|| SceneError::UnknownLayer {
        id: node_id.to_string(),
    })?;

    let (result, inserted) = insert_relative(&without, &node, position);
    if !inserted {
        // The target survived validation, so it cannot vanish during the
        // remove (it is outside the moved subtree).
        return Err(SceneError::UnknownTarget {
            id: position.target_id().to_string(),
        });
    }

    debug!(node_id, position = ?position, "Moved layer");
    Ok(result)
}

fn insert_relative(
    tree: &[Arc<LayerNode>],
    layer: &Arc<LayerNode>,
    position: &DropPosition,
) -> (Vec<Arc<LayerNode>>, bool) {
    let mut out = Vec::with_capacity(tree.len() + 1);
    let mut inserted = false;
    for node in tree {
        if inserted {
            out.push(Arc::clone(node));
            continue;
        }
        if node.id == position.target_id() {
            match position {
                DropPosition::Before { .. } => {
                    out.push(Arc::clone(layer));
                    out.push(Arc::clone(node));
                    inserted = true;
                    continue;
                }
                DropPosition::After { .. } => {
                    out.push(Arc::clone(node));
                    out.push(Arc::clone(layer));
                    inserted = true;
                    continue;
                }
                DropPosition::Into { .. } => {
                    if let Some(children) = node.children() {
                        let mut new_children = children.to_vec();
                        new_children.push(Arc::clone(layer));
                        out.push(with_children(node, new_children));
                        inserted = true;
                        continue;
                    }
                }
            }
        }
        if let Some(children) = node.children() {
            let (new_children, child_inserted) = insert_relative(children, layer, position);
            if child_inserted {
                out.push(with_children(node, new_children));
                inserted = true;
                continue;
            }
        }
        out.push(Arc::clone(node));
    }
    (out, inserted)
}

/// Insert a freshly created layer relative to an existing target.
///
/// The new layer's id must not already exist anywhere in the forest.
pub fn insert_layer_in_tree(
    tree: &[Arc<LayerNode>],
    layer: LayerNode,
    position: &DropPosition,
) -> SceneResult<Vec<Arc<LayerNode>>> {
    if find_layer_in_tree(tree, &layer.id).is_some() {
        return Err(SceneError::DuplicateLayerId { id: layer.id });
    }
    let target_id = position.target_id();
    let target = find_layer_in_tree(tree, target_id).ok_or_else(|| SceneError::UnknownTarget {
        id: target_id.to_string(),
    })?;
    if matches!(position, DropPosition::Into { .. }) && !target.is_group() {
        return Err(SceneError::IntoNonGroup {
            id: target_id.to_string(),
        });
    }

    let layer = Arc::new(layer);
    let (result, inserted) = insert_relative(tree, &layer, position);
    if !inserted {
        return Err(SceneError::UnknownTarget {
            id: target_id.to_string(),
        });
    }
    Ok(result)
}

/// Replace the node at its current position using `make`, which receives the
/// original node and returns its replacement.
fn replace_node<F>(tree: &[Arc<LayerNode>], id: &str, make: &mut Option<F>) -> Vec<Arc<LayerNode>>
where
    F: FnOnce(Arc<LayerNode>) -> LayerNode,
{
    tree.iter()
        .map(|node| {
            if make.is_none() {
                return Arc::clone(node);
            }
            if node.id == id {
                if let Some(f) = make.take() {
                    return Arc::new(f(Arc::clone(node)));
                }
            }
            if let Some(children) = node.children() {
                let new_children = replace_node(children, id, make);
                if make.is_none() {
                    return with_children(node, new_children);
                }
            }
            Arc::clone(node)
        })
        .collect()
}

/// Wrap the node in a new group at its current position.
///
/// The wrapped node keeps its identity; the new group's sole child is the
/// original node. Used by "group selection".
pub fn wrap_layer_in_group_in_tree(
    tree: &[Arc<LayerNode>],
    node_id: &str,
    group_id: impl Into<String>,
) -> SceneResult<Vec<Arc<LayerNode>>> {
    let group_id = group_id.into();
    wrap_with(tree, node_id, &group_id, |node, gid| {
        LayerNode::group(gid, "Group", vec![node])
    })
}

/// Wrap the node in a new group carrying a mask processor.
///
/// The "use as mask" gesture: the group's children are the original node
/// followed by a processor whose pipeline holds a single default mask
/// modifier targeting it.
pub fn wrap_layer_as_mask_in_tree(
    tree: &[Arc<LayerNode>],
    node_id: &str,
    group_id: impl Into<String>,
    processor_id: impl Into<String>,
) -> SceneResult<Vec<Arc<LayerNode>>> {
    let group_id = group_id.into();
    let processor_id = processor_id.into();
    if find_layer_in_tree(tree, &processor_id).is_some() {
        return Err(SceneError::DuplicateLayerId { id: processor_id });
    }
    wrap_with(tree, node_id, &group_id, move |node, gid| {
        let processor = LayerNode::processor(
            processor_id,
            "Mask",
            vec![Modifier::mask(MaskShapeConfig::default())],
        );
        LayerNode::group(gid, "Mask Group", vec![node, Arc::new(processor)])
    })
}

fn wrap_with<F>(
    tree: &[Arc<LayerNode>],
    node_id: &str,
    group_id: &str,
    make: F,
) -> SceneResult<Vec<Arc<LayerNode>>>
where
    F: FnOnce(Arc<LayerNode>, String) -> LayerNode,
{
    if find_layer_in_tree(tree, node_id).is_none() {
        return Err(SceneError::UnknownLayer {
            id: node_id.to_string(),
        });
    }
    if find_layer_in_tree(tree, group_id).is_some() {
        return Err(SceneError::DuplicateLayerId {
            id: group_id.to_string(),
        });
    }
    let gid = group_id.to_string();
    let mut make = Some(move |node| make(node, gid));
    Ok(replace_node(tree, node_id, &mut make))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_common::SurfaceConfig;

    fn surface(id: &str) -> Arc<LayerNode> {
        Arc::new(LayerNode::surface(id, id, SurfaceConfig::default()))
    }

    fn group(id: &str, children: Vec<Arc<LayerNode>>) -> Arc<LayerNode> {
        Arc::new(LayerNode::group(id, id, children))
    }

    /// [g1[s1, g2[s2]], s3]
    fn sample_tree() -> Vec<Arc<LayerNode>> {
        vec![
            group("g1", vec![surface("s1"), group("g2", vec![surface("s2")])]),
            surface("s3"),
        ]
    }

    #[test]
    fn find_is_preorder() {
        let tree = sample_tree();
        assert_eq!(find_layer_in_tree(&tree, "g1").unwrap().id, "g1");
        assert_eq!(find_layer_in_tree(&tree, "s2").unwrap().id, "s2");
        assert!(find_layer_in_tree(&tree, "nope").is_none());

        let order: Vec<String> = flatten_layers_in_tree(&tree)
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert_eq!(order, ["g1", "s1", "g2", "s2", "s3"]);
    }

    #[test]
    fn find_parent_cases() {
        let tree = sample_tree();
        assert_eq!(find_parent_layer_in_tree(&tree, "s1").unwrap().id, "g1");
        assert_eq!(find_parent_layer_in_tree(&tree, "s2").unwrap().id, "g2");
        // Root-level node has no parent
        assert!(find_parent_layer_in_tree(&tree, "g1").is_none());
        assert!(find_parent_layer_in_tree(&tree, "s3").is_none());
        // Unknown id also yields None
        assert!(find_parent_layer_in_tree(&tree, "nope").is_none());
    }

    #[test]
    fn is_descendant_checks_strict_subtree() {
        let tree = sample_tree();
        let g1 = find_layer_in_tree(&tree, "g1").unwrap();
        assert!(is_descendant(g1, "s1"));
        assert!(is_descendant(g1, "s2"));
        assert!(!is_descendant(g1, "g1"));
        assert!(!is_descendant(g1, "s3"));
        let s3 = find_layer_in_tree(&tree, "s3").unwrap();
        assert!(!is_descendant(s3, "s1"));
    }

    #[test]
    fn update_path_copies_and_shares_siblings() {
        let tree = sample_tree();
        let updated = update_layer_in_tree(&tree, "s2", |node| {
            node.name = "renamed".to_string();
        });

        assert_eq!(find_layer_in_tree(&updated, "s2").unwrap().name, "renamed");
        // Path to s2 (g1, g2) is reallocated
        assert!(!Arc::ptr_eq(&tree[0], &updated[0]));
        // s3 (off-path root sibling) is shared
        assert!(Arc::ptr_eq(&tree[1], &updated[1]));
        // s1 (off-path sibling inside g1) is shared
        let old_s1 = find_layer_in_tree(&tree, "s1").unwrap();
        let new_s1 = find_layer_in_tree(&updated, "s1").unwrap();
        assert!(Arc::ptr_eq(old_s1, new_s1));
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let tree = sample_tree();
        let updated = update_layer_in_tree(&tree, "nope", |node| {
            node.name = "never".to_string();
        });
        assert_eq!(updated.len(), tree.len());
        for (old, new) in tree.iter().zip(&updated) {
            assert!(Arc::ptr_eq(old, new));
        }
    }

    #[test]
    fn update_cannot_change_identity() {
        let tree = sample_tree();
        let updated = update_layer_in_tree(&tree, "s1", |node| {
            node.id = "hijacked".to_string();
        });
        assert!(find_layer_in_tree(&updated, "s1").is_some());
        assert!(find_layer_in_tree(&updated, "hijacked").is_none());
    }

    #[test]
    fn remove_nested_node() {
        let tree = sample_tree();
        let removed = remove_layer_from_tree(&tree, "s2");
        assert!(find_layer_in_tree(&removed, "s2").is_none());
        assert!(find_layer_in_tree(&removed, "g2").is_some());
        // Off-path nodes shared
        assert!(Arc::ptr_eq(&tree[1], &removed[1]));
    }

    #[test]
    fn remove_group_removes_subtree() {
        let tree = sample_tree();
        let removed = remove_layer_from_tree(&tree, "g1");
        assert!(find_layer_in_tree(&removed, "g1").is_none());
        assert!(find_layer_in_tree(&removed, "s1").is_none());
        assert!(find_layer_in_tree(&removed, "s2").is_none());
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let tree = sample_tree();
        let removed = remove_layer_from_tree(&tree, "nope");
        assert_eq!(removed.len(), tree.len());
        for (old, new) in tree.iter().zip(&removed) {
            assert!(Arc::ptr_eq(old, new));
        }
    }

    #[test]
    fn can_move_rejects_invalid_positions() {
        let tree = sample_tree();
        // Unknown node
        assert!(!can_move_layer_in_tree(&tree, "nope", &DropPosition::before("s3")));
        // Unknown target
        assert!(!can_move_layer_in_tree(&tree, "s1", &DropPosition::before("nope")));
        // Into a non-group
        assert!(!can_move_layer_in_tree(&tree, "s1", &DropPosition::into_group("s3")));
        // Self target
        assert!(!can_move_layer_in_tree(&tree, "s1", &DropPosition::after("s1")));
        assert!(!can_move_layer_in_tree(&tree, "g1", &DropPosition::into_group("g1")));
        // Cycle: target inside the moved subtree
        assert!(!can_move_layer_in_tree(&tree, "g1", &DropPosition::into_group("g2")));
        assert!(!can_move_layer_in_tree(&tree, "g1", &DropPosition::before("s2")));
    }

    #[test]
    fn can_move_accepts_valid_positions() {
        let tree = sample_tree();
        assert!(can_move_layer_in_tree(&tree, "s3", &DropPosition::into_group("g2")));
        assert!(can_move_layer_in_tree(&tree, "s1", &DropPosition::after("s3")));
        assert!(can_move_layer_in_tree(&tree, "g2", &DropPosition::before("g1")));
    }

    #[test]
    fn no_cycle_invariant_over_all_nodes() {
        let tree = sample_tree();
        for node in flatten_layers_in_tree(&tree) {
            let position = DropPosition::into_group(node.id.clone());
            assert!(!can_move_layer_in_tree(&tree, &node.id, &position));
        }
    }

    #[test]
    fn move_into_group_appends_last() {
        let tree = sample_tree();
        let moved = move_layer_in_tree(&tree, "s3", &DropPosition::into_group("g2")).unwrap();
        let g2 = find_layer_in_tree(&moved, "g2").unwrap();
        let ids: Vec<&str> = g2.children().unwrap().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["s2", "s3"]);
        assert_eq!(moved.len(), 1);
    }

    #[test]
    fn move_before_and_after_siblings() {
        let tree = sample_tree();
        let moved = move_layer_in_tree(&tree, "s3", &DropPosition::before("s1")).unwrap();
        let g1 = find_layer_in_tree(&moved, "g1").unwrap();
        let ids: Vec<&str> = g1.children().unwrap().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["s3", "s1", "g2"]);

        let moved = move_layer_in_tree(&tree, "s1", &DropPosition::after("s3")).unwrap();
        let ids: Vec<&str> = moved.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["g1", "s3", "s1"]);
    }

    #[test]
    fn move_preserves_node_identity() {
        let tree = sample_tree();
        let before = Arc::clone(find_layer_in_tree(&tree, "s2").unwrap());
        let moved = move_layer_in_tree(&tree, "s2", &DropPosition::after("s3")).unwrap();
        let after = find_layer_in_tree(&moved, "s2").unwrap();
        assert!(Arc::ptr_eq(&before, after));
    }

    #[test]
    fn move_self_into_is_rejected() {
        // Scenario E: g1 must never contain itself.
        let tree = sample_tree();
        let err = move_layer_in_tree(&tree, "g1", &DropPosition::into_group("g1")).unwrap_err();
        assert_eq!(err, SceneError::SelfTarget { id: "g1".into() });
    }

    #[test]
    fn move_into_own_descendant_is_rejected() {
        let tree = sample_tree();
        let err = move_layer_in_tree(&tree, "g1", &DropPosition::into_group("g2")).unwrap_err();
        assert!(matches!(err, SceneError::CycleMove { .. }));
    }

    #[test]
    fn move_into_non_group_is_rejected() {
        let tree = sample_tree();
        let err = move_layer_in_tree(&tree, "s1", &DropPosition::into_group("s3")).unwrap_err();
        assert_eq!(err, SceneError::IntoNonGroup { id: "s3".into() });
    }

    #[test]
    fn insert_layer_relative_to_nested_target() {
        let tree = sample_tree();
        let layer = LayerNode::surface("s4", "s4", SurfaceConfig::default());
        let inserted = insert_layer_in_tree(&tree, layer, &DropPosition::after("s2")).unwrap();
        let g2 = find_layer_in_tree(&inserted, "g2").unwrap();
        let ids: Vec<&str> = g2.children().unwrap().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["s2", "s4"]);
    }

    #[test]
    fn insert_duplicate_id_is_rejected() {
        let tree = sample_tree();
        let layer = LayerNode::surface("s1", "dup", SurfaceConfig::default());
        let err = insert_layer_in_tree(&tree, layer, &DropPosition::after("s3")).unwrap_err();
        assert_eq!(err, SceneError::DuplicateLayerId { id: "s1".into() });
    }

    #[test]
    fn wrap_replaces_node_in_place() {
        // Scenario D: root-level surface wrapped in a fresh group.
        let tree = sample_tree();
        let wrapped = wrap_layer_in_group_in_tree(&tree, "s3", "wrap-1").unwrap();
        let ids: Vec<&str> = wrapped.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["g1", "wrap-1"]);

        let new_group = find_layer_in_tree(&wrapped, "wrap-1").unwrap();
        assert!(new_group.is_group());
        let children = new_group.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, "s3");
        // Identity of the wrapped node is preserved
        assert!(Arc::ptr_eq(&tree[1], &children[0]));
    }

    #[test]
    fn wrap_nested_node() {
        let tree = sample_tree();
        let wrapped = wrap_layer_in_group_in_tree(&tree, "s2", "wrap-1").unwrap();
        let g2 = find_layer_in_tree(&wrapped, "g2").unwrap();
        let ids: Vec<&str> = g2.children().unwrap().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["wrap-1"]);
        assert_eq!(find_layer_in_tree(&wrapped, "s2").unwrap().id, "s2");
    }

    #[test]
    fn wrap_unknown_node_is_error() {
        let tree = sample_tree();
        let err = wrap_layer_in_group_in_tree(&tree, "nope", "wrap-1").unwrap_err();
        assert_eq!(err, SceneError::UnknownLayer { id: "nope".into() });
    }

    #[test]
    fn wrap_duplicate_group_id_is_error() {
        let tree = sample_tree();
        let err = wrap_layer_in_group_in_tree(&tree, "s3", "g1").unwrap_err();
        assert_eq!(err, SceneError::DuplicateLayerId { id: "g1".into() });
    }

    #[test]
    fn wrap_as_mask_injects_processor() {
        let tree = sample_tree();
        let wrapped = wrap_layer_as_mask_in_tree(&tree, "s3", "wrap-1", "proc-1").unwrap();
        let group = find_layer_in_tree(&wrapped, "wrap-1").unwrap();
        let children = group.children().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id, "s3");
        assert!(children[1].is_processor());
        let modifiers = children[1].modifiers().unwrap();
        assert_eq!(modifiers.len(), 1);
        assert!(modifiers[0].is_mask());
    }

    #[test]
    fn drop_position_serde_shape() {
        let pos = DropPosition::into_group("g1");
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"type":"into","targetId":"g1"}"#);
        let back: DropPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
