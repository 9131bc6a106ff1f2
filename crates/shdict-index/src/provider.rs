//! The tantivy search provider.

use std::path::Path;

use shdict_model::{
    ProviderError, QueryNode, SearchHit, SearchProvider, SearchRequest, SearchResponse,
    StoredField,
};
use tantivy::{
    Index, IndexReader, ReloadPolicy, TantivyDocument, Term,
    collector::{Count, TopDocs},
    query::TermQuery,
    schema::IndexRecordOption,
};
use tracing::debug;

use crate::{
    EntryIndex, IndexError,
    analyzer::Analyzers,
    compile::QueryCompiler,
    document::{document_id, hit_fields, stored_fields},
    schema::IndexSchema,
};

/// Serves searches and document fetches from a tantivy index.
///
/// Holds one reader; every call takes a fresh searcher from it, so the
/// provider can be shared across threads.
pub struct TantivyProvider {
    /// Reader over the committed index state.
    reader: IndexReader,
    /// Schema with field handles.
    schema: IndexSchema,
    /// Compiles query trees.
    compiler: QueryCompiler,
}

impl TantivyProvider {
    /// Opens the index at `path` for searching.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        EntryIndex::open(path)?.provider()
    }

    /// Creates a provider over an index with registered analyzers.
    pub(crate) fn new(
        index: &Index,
        schema: IndexSchema,
        analyzers: Analyzers,
    ) -> Result<Self, IndexError> {
        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| IndexError::read(&e))?;
        let compiler = QueryCompiler::new(schema.clone(), analyzers);
        Ok(Self {
            reader,
            schema,
            compiler,
        })
    }

    /// Picks up changes committed after the provider was created.
    pub fn reload(&self) -> Result<(), IndexError> {
        self.reader.reload().map_err(|e| IndexError::read(&e))
    }

    /// Returns the number of indexed entries.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Counts the entries matching a query.
    pub fn count(&self, query: &QueryNode) -> Result<u64, ProviderError> {
        let compiled = self.compiler.compile(query);
        let count = self
            .reader
            .searcher()
            .search(&*compiled, &Count)
            .map_err(|e| ProviderError::Query(e.to_string()))?;
        Ok(count as u64)
    }
}

impl SearchProvider for TantivyProvider {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError> {
        let query = self.compiler.compile(&request.query);
        let searcher = self.reader.searcher();

        // TopDocs panics on a zero limit
        if request.limit == 0 {
            let total = searcher
                .search(&*query, &Count)
                .map_err(|e| ProviderError::Query(e.to_string()))?;
            return Ok(SearchResponse {
                hits: Vec::new(),
                total: total as u64,
            });
        }

        let collector = (
            Count,
            TopDocs::with_limit(request.limit).and_offset(request.offset),
        );
        let (total, top_docs) = searcher
            .search(&*query, &collector)
            .map_err(|e| ProviderError::Query(e.to_string()))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(address)
                .map_err(|e| ProviderError::Query(e.to_string()))?;
            let Some(id) = document_id(&self.schema, &doc) else {
                continue;
            };
            hits.push(SearchHit {
                id,
                fields: hit_fields(&self.schema, &doc, &request.fields),
            });
        }

        debug!(
            query = %request.query.to_query_string(),
            offset = request.offset,
            limit = request.limit,
            total,
            returned = hits.len(),
            "search"
        );

        Ok(SearchResponse {
            hits,
            total: total as u64,
        })
    }

    fn document(&self, id: &str) -> Result<Option<Vec<StoredField>>, ProviderError> {
        let searcher = self.reader.searcher();
        let query = TermQuery::new(
            Term::from_field_text(self.schema.id, id),
            IndexRecordOption::Basic,
        );

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(1))
            .map_err(|e| ProviderError::Document {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        let Some((_score, address)) = top_docs.into_iter().next() else {
            return Ok(None);
        };

        let doc: TantivyDocument = searcher.doc(address).map_err(|e| ProviderError::Document {
            id: id.to_string(),
            message: e.to_string(),
        })?;

        stored_fields(&self.schema, id, &doc).map(Some)
    }
}
