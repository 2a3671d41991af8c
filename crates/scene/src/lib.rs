//! `hs-scene` — Layer-tree and modifier-pipeline operations.
//!
//! The mutation/query algebra over the recursive layer tree. Every operation
//! is a pure, path-copying function: it takes the current layer forest and
//! returns the next version, sharing unchanged subtrees with the input by
//! pointer. This is what makes undo/redo a matter of keeping old roots and
//! change detection a matter of pointer comparison.
//!
//! - **Tree**: find / parent / update / remove / insert / flatten,
//!   drag-and-drop repositioning ([`can_move_layer_in_tree`] +
//!   [`move_layer_in_tree`]), wrap-in-group, wrap-as-mask
//! - **Processor targeting**: [`is_processor_target`] / [`has_processor_below`]
//! - **Pipeline**: add / remove / update / reorder / replace over one
//!   processor's modifier array

pub mod error;
pub mod pipeline;
pub mod processor;
pub mod tree;

// Re-export the operation surface at crate root.
pub use error::{SceneError, SceneResult};
pub use pipeline::{
    add_effect, clear_modifiers, move_modifier_between_layers, remove_modifier_at,
    reorder_modifiers, set_modifier_pipeline, update_effect_at, ModifierDropPosition,
};
pub use processor::{has_processor_below, is_processor_target};
pub use tree::{
    can_move_layer_in_tree, find_layer_in_tree, find_parent_layer_in_tree, flatten_layers_in_tree,
    insert_layer_in_tree, is_descendant, move_layer_in_tree, remove_layer_from_tree,
    update_layer_in_tree, wrap_layer_as_mask_in_tree, wrap_layer_in_group_in_tree, DropPosition,
};
