//! Dictionary lookups for shdict.
//!
//! This crate turns a free-text query into pages of dictionary entries:
//!
//! - **Query building**: [`build_query`] matches the text as a phrase in any
//!   text field, optionally restricted to one source
//! - **Paging**: [`fetch_page`] fetches one page plus a look-ahead hit, and
//!   [`single_match`] decides when a fresh search opens an entry directly
//! - **Reconstruction**: [`reconstruct`] folds stored fields back into entries
//! - **Homophones**: [`HomophoneResolver`] expands characters into readings
//! - **Tokens**: [`Action`] encodes the callbacks behind list controls
//! - **Views**: [`Outcome`], [`ListView`] and [`DetailView`] for front ends
//!
//! [`Dictionary`] ties these together, one call per user interaction.
//!
//! # Example
//!
//! ```
//! use shdict_lookup::{Action, PagePayload, SearchKind, build_query};
//!
//! let query = build_query(" hao ", Some("c"));
//! assert!(query.to_query_string().ends_with("AND source:=c)"));
//!
//! let token = Action::GoToPage {
//!     kind: SearchKind::Definition,
//!     payload: PagePayload::new("hao", None, 1),
//! }
//! .encode();
//! assert_eq!(token, r#"shdef:goToPage|{"query":"hao","page":1}"#);
//! ```

#![warn(missing_docs)]

mod builder;
mod dictionary;
mod error;
mod homophone;
mod pager;
mod reconstruct;
#[cfg(test)]
mod test_support;
mod token;
mod view;

pub use builder::{SEARCH_FIELDS, build_query, source_filter};
pub use dictionary::Dictionary;
pub use error::{LookupError, TokenError};
pub use homophone::{DEFAULT_EXPANSION_LIMIT, HomophoneResolver, homophone_query};
pub use pager::{HIT_FIELDS, MAX_PAGE, PAGE_SIZE, Page, fetch_page, is_exact_match, single_match};
pub use reconstruct::{fold, reconstruct};
pub use token::{Action, PagePayload, SearchKind};
pub use view::{
    DefinitionBlock, DetailView, EMPTY_QUERY_MESSAGE, ERROR_MESSAGE, ListControls, ListItem,
    ListView, MEANING_UNKNOWN, NO_RESULTS_MESSAGE, Outcome, PageButton, truncate,
};
