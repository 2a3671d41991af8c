//! Document loading — the boundary where untrusted JSON becomes canonical.

use tracing::debug;

use crate::error::DocumentResult;
use crate::migrate::{document_needs_migration, migrate_document};
use crate::types::HeroDocument;

/// Parse a document from a JSON string, migrating legacy shapes first.
///
/// This is the only trusted path from external JSON to a [`HeroDocument`];
/// already-canonical documents skip the migration walk entirely.
pub fn from_json_str(json: &str) -> DocumentResult<HeroDocument> {
    let mut value: serde_json::Value = serde_json::from_str(json)?;
    if document_needs_migration(&value) {
        migrate_document(&mut value)?;
    } else {
        debug!("Document already canonical; skipping migration");
    }
    Ok(serde_json::from_value(value)?)
}
