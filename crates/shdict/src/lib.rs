//! shdict: a Shanghainese dictionary.
//!
//! Looks up words, readings and English meanings across several source
//! dictionaries, pages through the results, and finds homophones by reading.
//! Entries are imported offline from ndjson files into a local tantivy index.
//!
//! The lookup engine lives in `shdict-lookup`; this crate is the terminal
//! front end that drives it.

#![warn(missing_docs)]

pub mod cli;
