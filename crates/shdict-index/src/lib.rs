//! Tantivy-backed entry index for shdict.
//!
//! This crate is the search provider the lookup engine runs against. It handles:
//! - The index schema and per-field text analysis
//! - Compiling [`QueryNode`](shdict_model::QueryNode) trees into tantivy queries
//! - Paged search and stored-field document fetch via [`SearchProvider`](shdict_model::SearchProvider)
//! - Writing entries and bulk-importing ndjson dictionaries
//!
//! # Example
//!
//! ```
//! use shdict_index::EntryIndex;
//! use shdict_model::{Definition, Entry, EntryField, QueryNode, SearchProvider, SearchRequest};
//!
//! let index = EntryIndex::in_ram().unwrap();
//! let mut writer = index.writer().unwrap();
//! writer
//!     .add_entry(&Entry::new(
//!         "c",
//!         "阿拉",
//!         vec![],
//!         vec![Definition::new(vec!["aq-lá".into()], vec!["we".into()])],
//!     ))
//!     .unwrap();
//! writer.commit().unwrap();
//!
//! let provider = index.provider().unwrap();
//! let request = SearchRequest::new(QueryNode::phrase(EntryField::ReadingsNoDiacritics, "aq-laa"), 10);
//! let response = provider.search(&request).unwrap();
//! assert_eq!(response.total, 1);
//! assert_eq!(response.hits[0].id, "c:阿拉");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod compile;
mod document;
mod error;
mod import;
mod provider;
mod schema;
mod store;
mod writer;

pub use analyzer::{HAN_TOKENIZER, MEANING_TOKENIZER, READING_TOKENIZER};
pub use error::IndexError;
pub use import::{
    COMMIT_EVERY, ImportReporter, ImportStats, SilentReporter, import_dir, import_file,
    import_files, parse_record,
};
pub use provider::TantivyProvider;
pub use store::{EntryIndex, index_exists, remove_index};
pub use writer::EntryWriter;
