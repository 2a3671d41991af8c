//! Port traits — the injected boundaries between usecases and their hosts.
//!
//! Everything stateful is reached through one of these traits; there is no
//! module-level mutable state anywhere in the core. Hosts bind them to their
//! reactive stores, tests bind them to plain structs.

use serde::{Deserialize, Serialize};

use hs_common::{ForegroundConfig, LayerNode};
use hs_document::HeroDocument;

/// Partial update for a layer's common fields; `None` fields are untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl LayerPatch {
    /// Shallow-merge this patch onto a node.
    pub fn apply_to(&self, node: &mut LayerNode) {
        if let Some(name) = &self.name {
            node.name = name.clone();
        }
        if let Some(visible) = self.visible {
            node.visible = visible;
        }
    }
}

/// Handle returned by [`DocumentStore::subscribe`] for later unsubscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The document repository collaborator.
///
/// Tree operations are typically invoked as `store.set(op(&store.get()))`;
/// `subscribe` notifies external renderers/UI on every commit. The store owns
/// exactly one logical current document per instance.
pub trait DocumentStore {
    /// The current document version.
    fn get(&self) -> HeroDocument;

    /// Commit the next document version and notify subscribers.
    fn set(&mut self, document: HeroDocument);

    /// Patch one layer's common fields in place (path-copying) and commit.
    fn update_layer(&mut self, id: &str, patch: &LayerPatch);

    /// Register a listener invoked after every commit.
    fn subscribe(&mut self, listener: Box<dyn Fn(&HeroDocument)>) -> SubscriptionId;

    /// Remove a previously registered listener. Unknown ids are a no-op.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Access to the document's foreground element list.
pub trait ForegroundConfigPort {
    fn get(&self) -> ForegroundConfig;
    fn set(&mut self, config: ForegroundConfig);
}

/// The external selection store.
///
/// Selection is tri-state by convention (canvas layer / foreground element /
/// processor chip); this core only reads and writes the foreground slot and
/// asks the host to clear the canvas slot — it never owns the storage.
pub trait SelectionPort {
    /// Currently selected foreground element id, if any.
    fn selected_id(&self) -> Option<String>;

    /// Select (or deselect with `None`) a foreground element.
    fn set_selected_id(&mut self, id: Option<String>);

    /// Clear the canvas-layer selection domain.
    fn clear_canvas_selection(&mut self);
}
