//! In-memory document store.
//!
//! Reference implementation of [`DocumentStore`] for tests and hosts without
//! a reactive store of their own. Commits are whole-document swaps; listeners
//! fire after every commit.

use tracing::debug;

use hs_document::HeroDocument;
use hs_scene::update_layer_in_tree;

use crate::ports::{DocumentStore, LayerPatch, SubscriptionId};

type Listener = Box<dyn Fn(&HeroDocument)>;

/// Listener-notifying in-memory [`DocumentStore`].
pub struct InMemoryDocumentStore {
    document: HeroDocument,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl InMemoryDocumentStore {
    pub fn new(document: HeroDocument) -> Self {
        Self {
            document,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.document);
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get(&self) -> HeroDocument {
        self.document.clone()
    }

    fn set(&mut self, document: HeroDocument) {
        self.document = document;
        self.notify();
    }

    fn update_layer(&mut self, id: &str, patch: &LayerPatch) {
        let patch = patch.clone();
        self.document.layers = update_layer_in_tree(&self.document.layers, id, move |node| {
            patch.apply_to(node);
        });
        debug!(layer = id, "Committed layer patch");
        self.notify();
    }

    fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }
}
