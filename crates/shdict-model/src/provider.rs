//! The search provider contract.
//!
//! A provider is an inverted-index text search service over entry documents.
//! It executes [`QueryNode`] trees with offset/limit paging and hands back a
//! document's flat stored fields with their array positions. The lookup engine
//! only talks to the index through this trait.

use std::collections::BTreeMap;

use crate::{EntryField, ProviderError, QueryNode};

/// A stored field value as returned with a search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The field held exactly one value.
    One(String),
    /// The field held several values, in stored order.
    Many(Vec<String>),
}

impl FieldValue {
    /// Builds a value from a list, collapsing single-element lists.
    pub fn from_values(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            Self::One(values.remove(0))
        } else {
            Self::Many(values)
        }
    }

    /// Returns the values as a list regardless of arity.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            Self::One(v) => vec![v.as_str()],
            Self::Many(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    /// Returns the first value, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(v) => Some(v),
            Self::Many(vs) => vs.first().map(String::as_str),
        }
    }
}

/// One ranked hit of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Document key.
    pub id: String,
    /// Requested stored fields keyed by field path. Absent when the document has no value.
    pub fields: BTreeMap<String, FieldValue>,
}

impl SearchHit {
    /// Returns the first value of a field.
    pub fn value(&self, field: EntryField) -> Option<&str> {
        self.fields.get(field.path()).and_then(FieldValue::first)
    }

    /// Returns all values of a field, or an empty list when it is absent.
    pub fn values(&self, field: EntryField) -> Vec<&str> {
        self.fields
            .get(field.path())
            .map(FieldValue::as_list)
            .unwrap_or_default()
    }
}

/// A paged search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Query tree to execute.
    pub query: QueryNode,
    /// Maximum number of hits to return.
    pub limit: usize,
    /// Number of ranked hits to skip.
    pub offset: usize,
    /// Stored fields to load for each hit.
    pub fields: Vec<EntryField>,
}

impl SearchRequest {
    /// Creates a request for the first `limit` hits without stored fields.
    pub fn new(query: QueryNode, limit: usize) -> Self {
        Self {
            query,
            limit,
            offset: 0,
            fields: Vec::new(),
        }
    }

    /// Sets the number of hits to skip.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the stored fields to load for each hit.
    pub fn with_fields(mut self, fields: &[EntryField]) -> Self {
        self.fields = fields.to_vec();
        self
    }
}

/// Result of a search: one page of hits plus the total match count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    /// Ranked hits for the requested window.
    pub hits: Vec<SearchHit>,
    /// Total number of matching documents, independent of paging.
    pub total: u64,
}

/// A single stored value of a document, with its array positions.
///
/// Scalars have no positions, list values `[i]`, grouped values `[group, i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredField {
    /// Dotted field path.
    pub name: String,
    /// The stored text.
    pub value: String,
    /// Array positions locating the value.
    pub positions: Vec<usize>,
}

impl StoredField {
    /// Creates a stored field value at the given positions.
    pub fn new(field: EntryField, value: impl Into<String>, positions: Vec<usize>) -> Self {
        Self {
            name: field.path().to_string(),
            value: value.into(),
            positions,
        }
    }

    /// Creates a scalar stored field value.
    pub fn scalar(field: EntryField, value: impl Into<String>) -> Self {
        Self::new(field, value, Vec::new())
    }
}

/// A text search service over entry documents.
///
/// Implementations must be safe to share between threads; every lookup
/// interaction only reads.
pub trait SearchProvider: Send + Sync {
    /// Executes a query and returns the requested window of hits and the total count.
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError>;

    /// Fetches every stored value of a document, or `None` if the id is unknown.
    ///
    /// No ordering of the returned values is guaranteed.
    fn document(&self, id: &str) -> Result<Option<Vec<StoredField>>, ProviderError>;
}
