//! Homophone lookup: find words that sound like the query.
//!
//! Each character of the query is expanded to the readings it has as a
//! standalone headword. The lookup then matches entries whose readings, one
//! position per character, hit any of those readings.

use shdict_model::{EntryField, ProviderError, QueryNode, SearchProvider, SearchRequest};
use tracing::debug;

use crate::builder::source_filter;

/// Default number of hits fetched when expanding one character.
pub const DEFAULT_EXPANSION_LIMIT: usize = 100;

/// Expands characters into readings and builds homophone queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomophoneResolver {
    /// Hits fetched per character expansion.
    expansion_limit: usize,
}

impl Default for HomophoneResolver {
    fn default() -> Self {
        Self::new(DEFAULT_EXPANSION_LIMIT)
    }
}

impl HomophoneResolver {
    /// Creates a resolver fetching up to `expansion_limit` hits per character.
    pub fn new(expansion_limit: usize) -> Self {
        Self { expansion_limit }
    }

    /// Returns the readings of a single character headword, deduplicated in rank order.
    pub fn readings_of<P: SearchProvider + ?Sized>(
        &self,
        provider: &P,
        c: char,
    ) -> Result<Vec<String>, ProviderError> {
        let word = c.to_string();
        let request = SearchRequest::new(QueryNode::phrase(EntryField::Word, &word), self.expansion_limit)
            .with_fields(&[EntryField::Word, EntryField::Readings]);
        let response = provider.search(&request)?;

        let mut readings: Vec<String> = Vec::new();
        for hit in response
            .hits
            .iter()
            .filter(|h| h.value(EntryField::Word) == Some(word.as_str()))
        {
            for reading in hit.values(EntryField::Readings) {
                if !readings.iter().any(|r| r == reading) {
                    readings.push(reading.to_string());
                }
            }
        }
        debug!(char = %c, readings = ?readings, "expanded character");
        Ok(readings)
    }

    /// Builds the homophone query for `text`, restricted to `source` when given.
    ///
    /// Returns `None` as soon as one character has no known readings; no
    /// further expansion searches are run after that.
    pub fn resolve<P: SearchProvider + ?Sized>(
        &self,
        provider: &P,
        text: &str,
        source: Option<&str>,
    ) -> Result<Option<QueryNode>, ProviderError> {
        let mut positions = Vec::new();
        for c in text.trim().chars() {
            let readings = self.readings_of(provider, c)?;
            if readings.is_empty() {
                debug!(char = %c, "no readings for character");
                return Ok(None);
            }
            positions.push(readings);
        }
        if positions.is_empty() {
            return Ok(None);
        }
        Ok(Some(homophone_query(&positions, source)))
    }
}

/// Builds the conjunction of one reading disjunction per position, plus the source filter.
pub fn homophone_query(positions: &[Vec<String>], source: Option<&str>) -> QueryNode {
    let mut parts: Vec<QueryNode> = positions
        .iter()
        .map(|readings| {
            QueryNode::Or(
                readings
                    .iter()
                    .map(|r| QueryNode::phrase(EntryField::Readings, r))
                    .collect(),
            )
        })
        .collect();
    parts.push(source_filter(source));
    QueryNode::And(parts)
}
