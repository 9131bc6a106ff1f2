//! Entry model, query tree and search provider contract for shdict.
//!
//! This crate holds the types shared by the index and the lookup engine:
//!
//! - **Entries**: [`Entry`] and its positional [`Definition`] groups
//! - **Fields**: [`EntryField`], the closed set of stored field paths
//! - **Queries**: [`QueryNode`], the provider-native query tree
//! - **Providers**: the [`SearchProvider`] trait with its request and response types
//! - **Sources**: the [`SourceTable`] mapping source codes to display names
//!
//! # Example
//!
//! ```
//! use shdict_model::{EntryField, QueryNode, strip_diacritics};
//!
//! let query = QueryNode::or(vec![
//!     QueryNode::phrase(EntryField::Word, "阿拉"),
//!     QueryNode::phrase(EntryField::Readings, "aq la"),
//! ]);
//! assert!(matches!(query, QueryNode::Or(_)));
//! assert_eq!(strip_diacritics("iá"), "iaa");
//! ```

#![warn(missing_docs)]

mod diacritics;
mod entry;
mod error;
mod field;
mod provider;
mod query;
mod source;

pub use diacritics::strip_diacritics;
pub use entry::{Definition, Entry, entry_id};
pub use error::ProviderError;
pub use field::{EntryField, FieldShape};
pub use provider::{FieldValue, SearchHit, SearchProvider, SearchRequest, SearchResponse, StoredField};
pub use query::QueryNode;
pub use source::SourceTable;
