//! Document serialization.
//!
//! String-level only: where the bytes go (file, IndexedDB, export bundle) is
//! the business of external persistence backends.

use crate::error::DocumentResult;
use crate::types::HeroDocument;

/// Serialize a document to pretty-printed JSON.
pub fn to_json_string(document: &HeroDocument) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Serialize a document to compact JSON (for embedding/export).
pub fn to_json_string_compact(document: &HeroDocument) -> DocumentResult<String> {
    Ok(serde_json::to_string(document)?)
}
