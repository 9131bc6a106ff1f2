//! Paging of search results and the exact-match short-circuit.

use shdict_model::{EntryField, ProviderError, QueryNode, SearchHit, SearchProvider, SearchRequest};
use tracing::debug;

/// Number of results shown per page.
pub const PAGE_SIZE: usize = 25;

/// Highest page number a lookup may ask for; its offset still fits in a `u32`.
pub const MAX_PAGE: usize = u32::MAX as usize / PAGE_SIZE;

/// Stored fields loaded with each hit; enough to judge exact matches.
pub const HIT_FIELDS: [EntryField; 5] = [
    EntryField::Word,
    EntryField::AlternateForms,
    EntryField::Readings,
    EntryField::ReadingsNoDiacritics,
    EntryField::Source,
];

/// One page of ranked hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page number.
    pub number: usize,
    /// Hits on this page, at most [`PAGE_SIZE`].
    pub hits: Vec<SearchHit>,
    /// Total number of matching entries.
    pub total: u64,
    /// Whether a further page exists.
    pub has_next: bool,
}

impl Page {
    /// Entry ids on this page, in rank order.
    pub fn ids(&self) -> Vec<String> {
        self.hits.iter().map(|h| h.id.clone()).collect()
    }

    /// One-based rank of the first hit on this page.
    pub fn first_rank(&self) -> usize {
        self.number.saturating_mul(PAGE_SIZE).saturating_add(1)
    }
}

/// Fetches page `number` of a query.
///
/// Asks for one hit more than a page holds; getting it back means a next
/// page exists. Pages past [`MAX_PAGE`] are refused without searching.
pub fn fetch_page<P: SearchProvider + ?Sized>(
    provider: &P,
    query: &QueryNode,
    number: usize,
) -> Result<Page, ProviderError> {
    if number > MAX_PAGE {
        return Err(ProviderError::Query(format!(
            "page {number} is past the last page {MAX_PAGE}"
        )));
    }
    let request = SearchRequest::new(query.clone(), PAGE_SIZE + 1)
        .with_offset(number * PAGE_SIZE)
        .with_fields(&HIT_FIELDS);
    let mut response = provider.search(&request)?;

    let has_next = response.hits.len() > PAGE_SIZE;
    response.hits.truncate(PAGE_SIZE);
    debug!(
        page = number,
        hits = response.hits.len(),
        total = response.total,
        has_next,
        "fetched page"
    );

    Ok(Page {
        number,
        hits: response.hits,
        total: response.total,
        has_next,
    })
}

/// Whether a hit's word, an alternate form, a reading or a folded reading equals the query.
pub fn is_exact_match(hit: &SearchHit, query: &str) -> bool {
    let query = query.trim();
    [
        EntryField::Word,
        EntryField::AlternateForms,
        EntryField::Readings,
        EntryField::ReadingsNoDiacritics,
    ]
    .into_iter()
    .any(|field| hit.values(field).contains(&query))
}

/// Picks the hit a fresh search should open directly, if any.
///
/// That is the only hit when the page holds one, or the only exact match
/// when exactly one hit on the page is one.
pub fn single_match<'a>(hits: &'a [SearchHit], query: &str) -> Option<&'a SearchHit> {
    if let [only] = hits {
        return Some(only);
    }
    let mut exact = hits.iter().filter(|h| is_exact_match(h, query));
    match (exact.next(), exact.next()) {
        (Some(hit), None) => Some(hit),
        _ => None,
    }
}
