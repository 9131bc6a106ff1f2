//! Errors reported by search providers.

use thiserror::Error;

/// Errors a search provider can return.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The index could not be read.
    #[error("index unavailable: {0}")]
    Unavailable(String),

    /// The query could not be executed.
    #[error("query failed: {0}")]
    Query(String),

    /// A stored document could not be loaded.
    #[error("failed to load document {id}: {message}")]
    Document {
        /// Document key that failed to load.
        id: String,
        /// Error message.
        message: String,
    },
}
