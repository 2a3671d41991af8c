//! Error types for tree and pipeline operations.

use thiserror::Error;

/// Errors from rejected tree/pipeline mutations.
///
/// Structural no-ops (unknown ids in find/remove/update, out-of-range
/// pipeline indices) are not errors — those operations return their input
/// unchanged. These variants cover mutations that would corrupt the tree if
/// applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The layer being operated on does not exist in the tree.
    #[error("Layer not found: {id}")]
    UnknownLayer { id: String },

    /// The drop target does not exist in the tree.
    #[error("Drop target not found: {id}")]
    UnknownTarget { id: String },

    /// An `into` drop position pointed at a non-group layer.
    #[error("Cannot drop into non-group layer: {id}")]
    IntoNonGroup { id: String },

    /// The drop target is the moved layer itself.
    #[error("Layer cannot be dropped relative to itself: {id}")]
    SelfTarget { id: String },

    /// The drop target lies inside the moved layer's own subtree.
    #[error("Cannot move layer {id} into its own subtree (target: {target_id})")]
    CycleMove { id: String, target_id: String },

    /// Inserting a layer whose id already exists in the tree.
    #[error("Layer id already exists in tree: {id}")]
    DuplicateLayerId { id: String },

    /// Cross-layer modifier drag-and-drop is declared in the UI surface but
    /// has no defined semantics yet.
    #[error("Moving modifiers between layers is not implemented")]
    ModifierMoveUnsupported,
}

/// Convenience Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
