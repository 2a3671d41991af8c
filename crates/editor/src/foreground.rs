//! Foreground element usecase.
//!
//! CRUD + selection orchestration over the flat foreground element list,
//! working entirely through injected ports. Selecting a foreground element
//! clears the canvas-layer selection (the two domains are mutually exclusive
//! by convention); deselecting does not touch the canvas domain.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use hs_common::{
    ForegroundElementConfig, ForegroundElementKind, ForegroundElementPatch,
};

use crate::ports::{ForegroundConfigPort, SelectionPort};

/// Foreground element CRUD over injected config and selection ports.
pub struct ForegroundElements<C, S> {
    config: C,
    selection: S,
}

impl<C: ForegroundConfigPort, S: SelectionPort> ForegroundElements<C, S> {
    pub fn new(config: C, selection: S) -> Self {
        Self { config, selection }
    }

    /// Add a new element with type-specific defaults and select it.
    ///
    /// Ids are `"{kind}-{millis}"`; a numeric suffix disambiguates additions
    /// landing on the same millisecond.
    pub fn add_element(&mut self, kind: ForegroundElementKind) -> String {
        let mut config = self.config.get();
        let id = unique_element_id(kind, &config.elements);
        config
            .elements
            .push(ForegroundElementConfig::with_defaults(&id, kind));
        self.config.set(config);
        debug!(id = %id, "Added foreground element");
        self.select_element(Some(&id));
        id
    }

    /// Select a foreground element, or deselect with `None`.
    ///
    /// Selecting clears the canvas-layer selection; deselecting must not —
    /// a canvas click both selects a layer and deselects the foreground, and
    /// the layer selection has to survive that.
    pub fn select_element(&mut self, id: Option<&str>) {
        match id {
            Some(id) => {
                self.selection.set_selected_id(Some(id.to_string()));
                self.selection.clear_canvas_selection();
            }
            None => self.selection.set_selected_id(None),
        }
    }

    /// Remove an element; clears the selection iff the removed element was
    /// selected. Unknown ids are a no-op.
    pub fn remove_element(&mut self, id: &str) {
        let mut config = self.config.get();
        let len_before = config.elements.len();
        config.elements.retain(|element| element.id != id);
        if config.elements.len() == len_before {
            return;
        }
        self.config.set(config);
        if self.selection.selected_id().as_deref() == Some(id) {
            self.selection.set_selected_id(None);
        }
    }

    /// Shallow-merge a patch onto the element with `id`. Unknown ids are a
    /// no-op.
    pub fn update_element(&mut self, id: &str, patch: &ForegroundElementPatch) {
        let mut config = self.config.get();
        if let Some(element) = config.elements.iter_mut().find(|e| e.id == id) {
            patch.apply_to(element);
            self.config.set(config);
        }
    }

    /// Patch the currently selected element; a no-op when nothing is
    /// selected.
    pub fn update_selected_element(&mut self, patch: &ForegroundElementPatch) {
        if let Some(id) = self.selection.selected_id() {
            self.update_element(&id, patch);
        }
    }

    /// The current element list.
    pub fn elements(&self) -> Vec<ForegroundElementConfig> {
        self.config.get().elements
    }
}

fn unique_element_id(
    kind: ForegroundElementKind,
    existing: &[ForegroundElementConfig],
) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let base = format!("{}-{}", kind.as_str(), millis);
    if !existing.iter().any(|e| e.id == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.iter().any(|e| e.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}
