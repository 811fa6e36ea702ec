//! Error types for the catalogue store.

use thiserror::Error;

/// Errors raised by the catalogue store and its document-store collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request to the document store failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Document store returned a non-success status.
    #[error("document store returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body prefix for diagnostics.
        body: String,
    },

    /// Document could not be decoded into its entity type.
    #[error("malformed document in {collection}/{id}: {message}")]
    MalformedDocument {
        /// Collection the document belongs to.
        collection: String,
        /// Document key.
        id: String,
        /// Decode failure detail.
        message: String,
    },

    /// The request was well-formed but cannot be satisfied.
    #[error("{0}")]
    Invalid(String),

    /// A uniqueness rule was violated.
    #[error("{0}")]
    Conflict(String),

    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
}
