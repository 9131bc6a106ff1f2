//! Query construction for definition lookups.

use shdict_model::{EntryField, QueryNode};

/// Fields a definition lookup matches the query against.
pub const SEARCH_FIELDS: [EntryField; 5] = [
    EntryField::Meanings,
    EntryField::Readings,
    EntryField::ReadingsNoDiacritics,
    EntryField::Word,
    EntryField::AlternateForms,
];

/// Returns the source restriction: an exact term, or match-all without a filter.
pub fn source_filter(source: Option<&str>) -> QueryNode {
    match source {
        Some(code) => QueryNode::term(EntryField::Source, code),
        None => QueryNode::MatchAll,
    }
}

/// Builds the definition lookup query.
///
/// Matches entries where the trimmed text appears as a phrase in any of the
/// [`SEARCH_FIELDS`], restricted to `source` when given. The caller handles
/// empty text before getting here.
pub fn build_query(text: &str, source: Option<&str>) -> QueryNode {
    let text = text.trim();
    let any_field = QueryNode::Or(
        SEARCH_FIELDS
            .iter()
            .map(|&field| QueryNode::phrase(field, text))
            .collect(),
    );
    QueryNode::And(vec![any_field, source_filter(source)])
}
