//! Error types for the document crate (thiserror-based).

use thiserror::Error;

/// Errors that can occur at the document load/save boundary.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document structure is malformed beyond what migration can repair.
    #[error("Invalid document: {reason}")]
    InvalidDocument { reason: String },

    /// Document version is from a newer format than this build understands.
    #[error("Unsupported document version: {version}")]
    UnsupportedVersion { version: String },

    /// Migration from a legacy shape failed.
    #[error("Migration failed: {reason}")]
    MigrationFailed { reason: String },
}

/// Convenience Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
