//! Error types for the anchr-core library.
//!
//! Errors exist only at the loading boundary. The extraction core signals
//! absence of a match with `Option::None` rather than an error.

use thiserror::Error;

/// Errors raised while loading a standardized text document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to read the document file.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The document JSON does not match the standardized text model.
    #[error("failed to parse document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading an extraction query.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Failed to read the query file.
    #[error("failed to read query: {0}")]
    Io(#[from] std::io::Error),

    /// The query JSON is not a valid label or row query.
    #[error("failed to parse query JSON: {0}")]
    Json(#[from] serde_json::Error),
}
