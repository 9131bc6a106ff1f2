//! Source dictionary names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maps short source codes to human-readable dictionary names.
///
/// Loaded once from configuration and handed to the components that render
/// attribution or offer a source filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceTable(BTreeMap<String, String>);

impl SourceTable {
    /// Creates a table from `(code, name)` pairs.
    pub fn new<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        )
    }

    /// Returns the display name of a source, or `""` for unknown codes.
    pub fn name(&self, code: &str) -> &str {
        self.0.get(code).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the code is a known source.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Iterates `(code, name)` pairs ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    /// Returns the number of known sources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no sources are known.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds or replaces a source.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.0.insert(code.into(), name.into());
    }
}
