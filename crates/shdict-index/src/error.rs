//! Error types for the shdict-index crate.

use std::{io, path::PathBuf};

use shdict_model::ProviderError;
use thiserror::Error;

/// Errors that can occur when working with the entry index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to open or create the index.
    #[error("failed to open index at {path}: {message}")]
    OpenIndex {
        /// Path to the index directory.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to write to the index.
    #[error("failed to write to index: {0}")]
    Write(String),

    /// Failed to commit changes to the index.
    #[error("failed to commit index: {0}")]
    Commit(String),

    /// Failed to read from the index.
    #[error("failed to read index: {0}")]
    Read(String),

    /// A line of an import file is not a valid entry record.
    #[error("{path}:{line}: invalid entry record: {message}")]
    Record {
        /// Import file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Parse error message.
        message: String,
    },

    /// An analyzer could not be built.
    #[error("failed to build analyzer {name}: {message}")]
    Analyzer {
        /// Tokenizer name.
        name: &'static str,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IndexError {
    /// Creates an `OpenIndex` error from a path and Tantivy error.
    pub(crate) fn open_index(path: PathBuf, source: &tantivy::TantivyError) -> Self {
        Self::OpenIndex {
            path,
            message: source.to_string(),
        }
    }

    /// Creates a `Write` error from a Tantivy error.
    pub(crate) fn write(source: &tantivy::TantivyError) -> Self {
        Self::Write(source.to_string())
    }

    /// Creates a `Commit` error from a Tantivy error.
    pub(crate) fn commit(source: &tantivy::TantivyError) -> Self {
        Self::Commit(source.to_string())
    }

    /// Creates a `Read` error from a Tantivy error.
    pub(crate) fn read(source: &tantivy::TantivyError) -> Self {
        Self::Read(source.to_string())
    }
}

impl From<IndexError> for ProviderError {
    fn from(err: IndexError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
