//! Scripted search provider for unit tests.

use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    sync::Mutex,
};

use shdict_model::{
    Entry, EntryField, FieldValue, ProviderError, SearchHit, SearchProvider, SearchRequest,
    SearchResponse, StoredField,
};

/// Builds a hit carrying a word and readings.
pub fn hit(id: &str, word: &str, readings: &[&str]) -> SearchHit {
    let mut fields = BTreeMap::new();
    fields.insert(EntryField::Word.path().to_string(), FieldValue::One(word.into()));
    if !readings.is_empty() {
        fields.insert(
            EntryField::Readings.path().to_string(),
            FieldValue::from_values(readings.iter().map(|r| r.to_string()).collect()),
        );
    }
    SearchHit {
        id: id.into(),
        fields,
    }
}

/// A provider that answers searches from a queue and documents from a map.
///
/// Every request is recorded. Once the queue runs dry searches return nothing.
#[derive(Default)]
pub struct ScriptedProvider {
    /// Responses to upcoming searches.
    responses: Mutex<VecDeque<SearchResponse>>,
    /// Stored fields by document id.
    documents: HashMap<String, Vec<StoredField>>,
    /// Error message every call fails with, if set.
    failure: Option<String>,
    /// Every search request received.
    requests: Mutex<Vec<SearchRequest>>,
}

impl ScriptedProvider {
    /// Creates a provider with no responses and no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response to the next search.
    pub fn respond(self, hits: Vec<SearchHit>, total: u64) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(SearchResponse { hits, total });
        self
    }

    /// Makes every call fail.
    pub fn fail(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Serves an entry's flattened fields on document fetch.
    pub fn with_entry(self, entry: &Entry) -> Self {
        self.with_document(&entry.id, entry.flatten())
    }

    /// Serves raw stored fields on document fetch.
    pub fn with_document(mut self, id: &str, fields: Vec<StoredField>) -> Self {
        self.documents.insert(id.to_string(), fields);
        self
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SearchProvider for ScriptedProvider {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(message) = &self.failure {
            return Err(ProviderError::Unavailable(message.clone()));
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    fn document(&self, id: &str) -> Result<Option<Vec<StoredField>>, ProviderError> {
        if let Some(message) = &self.failure {
            return Err(ProviderError::Document {
                id: id.to_string(),
                message: message.clone(),
            });
        }
        Ok(self.documents.get(id).cloned())
    }
}
