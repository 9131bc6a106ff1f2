//! The lookup service a front end talks to.

use shdict_model::{QueryNode, SearchProvider, SourceTable};
use tracing::{debug, error, warn};

use crate::{
    LookupError,
    builder::build_query,
    homophone::HomophoneResolver,
    pager::{fetch_page, single_match},
    reconstruct::reconstruct,
    token::{Action, PagePayload, SearchKind},
    view::{DetailView, ListView, Outcome},
};

/// Dictionary lookups over a shared, read-only search provider.
///
/// Every method is one self-contained interaction; nothing is remembered
/// between calls except what the caller hands back in a token. A
/// `Dictionary` can be shared across threads when its provider can.
pub struct Dictionary<P> {
    /// Index to search.
    provider: P,
    /// Source display names.
    sources: SourceTable,
    /// Homophone expansion.
    homophones: HomophoneResolver,
}

impl<P: SearchProvider> Dictionary<P> {
    /// Creates a dictionary over a provider.
    pub fn new(provider: P, sources: SourceTable) -> Self {
        Self {
            provider,
            sources,
            homophones: HomophoneResolver::default(),
        }
    }

    /// Sets how many hits a homophone expansion fetches per character.
    pub fn with_homophone_expansion_limit(mut self, limit: usize) -> Self {
        self.homophones = HomophoneResolver::new(limit);
        self
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The source table used for attribution.
    pub fn sources(&self) -> &SourceTable {
        &self.sources
    }

    /// Looks up a word, reading or meaning.
    ///
    /// Opens the entry directly when the first page has a single result or a
    /// single exact match; otherwise lists the first page.
    pub fn search(&self, query: &str, source: Option<&str>) -> Result<Outcome, LookupError> {
        let payload = PagePayload::new(query.trim(), source, 0);
        self.show(SearchKind::Definition, &payload, true).inspect_err(log_failure)
    }

    /// Looks up words that sound like the query, with the same first-page rule as [`Self::search`].
    pub fn homophones(&self, query: &str, source: Option<&str>) -> Result<Outcome, LookupError> {
        let payload = PagePayload::new(query.trim(), source, 0);
        self.show(SearchKind::Homophone, &payload, true).inspect_err(log_failure)
    }

    /// Shows a page of an earlier lookup, always as a list.
    pub fn go_to_page(&self, kind: SearchKind, payload: &PagePayload) -> Result<Outcome, LookupError> {
        self.show(kind, payload, false).inspect_err(log_failure)
    }

    /// Shows one entry by id.
    pub fn select(&self, id: &str) -> Result<Outcome, LookupError> {
        self.detail(id).inspect_err(log_failure)
    }

    /// Decodes a callback token and runs its action.
    ///
    /// Returns `None` for a malformed token; the interaction is dropped.
    pub fn handle_callback(&self, token: &str) -> Option<Result<Outcome, LookupError>> {
        match Action::decode(token) {
            Ok(Action::GoToPage { kind, payload }) => Some(self.go_to_page(kind, &payload)),
            Ok(Action::Select { id, .. }) => Some(self.select(&id)),
            Err(err) => {
                warn!(token, error = %err, "dropping malformed callback");
                None
            }
        }
    }

    /// Builds the query for a lookup, or `None` when it cannot match anything.
    fn query_for(&self, kind: SearchKind, payload: &PagePayload) -> Result<Option<QueryNode>, LookupError> {
        let source = payload.source.as_deref();
        Ok(match kind {
            SearchKind::Definition => Some(build_query(&payload.query, source)),
            SearchKind::Homophone => self.homophones.resolve(&self.provider, &payload.query, source)?,
        })
    }

    /// Runs a lookup and renders the requested page.
    fn show(&self, kind: SearchKind, payload: &PagePayload, fresh: bool) -> Result<Outcome, LookupError> {
        if payload.query.trim().is_empty() {
            return Ok(Outcome::EmptyQuery);
        }
        debug!(%kind, query = %payload.query, source = ?payload.source, page = payload.page, "lookup");

        let no_results = || Outcome::NoResults {
            query: payload.query.clone(),
        };
        let Some(query) = self.query_for(kind, payload)? else {
            return Ok(no_results());
        };
        let page = fetch_page(&self.provider, &query, payload.page)?;
        if page.total == 0 {
            return Ok(no_results());
        }

        if fresh {
            if let Some(hit) = single_match(&page.hits, &payload.query) {
                return self.detail(&hit.id);
            }
        }

        let entries = reconstruct(&self.provider, &page.ids())?;
        Ok(Outcome::List(ListView::new(kind, payload, &page, &entries)))
    }

    /// Renders one entry.
    fn detail(&self, id: &str) -> Result<Outcome, LookupError> {
        let entry = reconstruct(&self.provider, &[id.to_string()])?
            .pop()
            .ok_or_else(|| LookupError::MissingDocument { id: id.to_string() })?;
        Ok(Outcome::Detail(DetailView::new(&entry, &self.sources)))
    }
}

/// Logs a failed interaction.
fn log_failure(err: &LookupError) {
    error!(error = %err, "lookup failed");
}
