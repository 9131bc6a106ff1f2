//! Error types for lookups and callback tokens.

use shdict_model::ProviderError;
use thiserror::Error;

/// Errors that end one lookup interaction.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The search provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A document listed by a search could not be fetched.
    #[error("document {id} not found")]
    MissingDocument {
        /// Document key.
        id: String,
    },

    /// A fetched document could not be folded into an entry.
    #[error("malformed document {id}: {message}")]
    MalformedDocument {
        /// Document key.
        id: String,
        /// What is wrong with it.
        message: String,
    },
}

/// Errors decoding a callback token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token has no `|` separator.
    #[error("token has no separator")]
    MissingSeparator,

    /// The prefix names no known action.
    #[error("unknown token prefix: {0}")]
    UnknownPrefix(String),

    /// The payload is not valid JSON for the action.
    #[error("invalid token payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The page number is negative.
    #[error("invalid page number: {0}")]
    NegativePage(i64),

    /// The page number is past the last page a lookup can reach.
    #[error("page number out of range: {0}")]
    PageOutOfRange(i64),
}
