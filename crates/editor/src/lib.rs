//! `hs-editor` — Usecase layer and injected ports.
//!
//! The thin orchestration layer between the pure document core and a host
//! UI. Everything stateful is reached through explicitly injected port
//! traits:
//!
//! - **`DocumentStore`**: the document repository (`get`/`set`/`update_layer`/
//!   `subscribe`), with an [`InMemoryDocumentStore`] reference implementation
//! - **`SelectionPort`** / **`ForegroundConfigPort`**: the host's selection
//!   and foreground stores
//! - **`ForegroundElements`**: CRUD + selection orchestration over the
//!   foreground (title/description) element list

pub mod foreground;
pub mod ports;
pub mod store;

// Re-export primary types at crate root.
pub use foreground::ForegroundElements;
pub use ports::{
    DocumentStore, ForegroundConfigPort, LayerPatch, SelectionPort, SubscriptionId,
};
pub use store::InMemoryDocumentStore;
