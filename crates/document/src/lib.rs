//! `hs-document` — Serialized document shape, normalization, and migration.
//!
//! This crate owns the load/save boundary of the HeroStage document core:
//!
//! - **Types**: `HeroDocument`, the web-editor-compatible JSON document
//! - **Normalization**: legacy untagged surface/mask configs → canonical
//!   tagged form, and back for compatibility callers
//! - **Effect compat**: legacy flat exclusive-effect maps ↔ canonical ordered
//!   pipelines (legacy → canonical is lossless; the reverse drops duplicate
//!   effect ids, first match wins)
//! - **Migration**: whole-document structural migration with an explicit
//!   version stamp; idempotent, and a no-op on canonical documents
//! - **Load/Save**: `from_json_str` (parse → migrate → typed) and
//!   `to_json_string(_compact)`
//!
//! # Usage
//!
//! ```rust
//! use hs_document::{from_json_str, to_json_string, HeroDocument};
//!
//! let doc = HeroDocument::new("My Hero");
//! let json = to_json_string(&doc).unwrap();
//! let loaded = from_json_str(&json).unwrap();
//! assert_eq!(loaded.name, "My Hero");
//! ```

pub mod effects_compat;
pub mod error;
pub mod load;
pub mod migrate;
pub mod normalize;
pub mod save;
pub mod types;

// Re-export primary API at crate root
pub use effects_compat::{
    migrate_legacy_effect_config, to_legacy_effect_config, LegacyEffectConfig, LegacyEffectSlot,
};
pub use error::{DocumentError, DocumentResult};
pub use load::from_json_str;
pub use migrate::{document_needs_migration, migrate_document, CURRENT_VERSION};
pub use normalize::{
    denormalize_mask_config, denormalize_surface_config, normalize_mask_config,
    normalize_surface_config,
};
pub use save::{to_json_string, to_json_string_compact};
pub use types::HeroDocument;
