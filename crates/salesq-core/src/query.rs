//! Query engine — `list`, `search` and `fetch` over a [`RecordStore`].
//!
//! Every operation takes an already-validated request and borrows from the
//! store; none of them can fail. Zero matches and unknown ids are ordinary
//! outcomes.

use std::collections::HashSet;

use crate::request::{FetchRequest, ListRequest, SearchRequest};
use crate::store::RecordStore;
use crate::types::SaleRecord;

/// The matches of one search, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    /// At most `limit` matching records.
    pub hits: Vec<&'a SaleRecord>,
    /// Number of matching records before truncation.
    pub total_matches: usize,
}

/// The resolution of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome<'a> {
    pub found: Vec<&'a SaleRecord>,
    /// Requested ids with no record, spelled as the caller supplied them.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: RecordStore,
    resource_uri: String,
}

impl QueryEngine {
    /// `resource_uri` is the dataset locator; `{resource_uri}#{id}` is accepted
    /// anywhere a bare record id is.
    pub fn new(store: RecordStore, resource_uri: impl Into<String>) -> Self {
        Self {
            store,
            resource_uri: resource_uri.into(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }

    /// The first `count` records in generation order, clamped to `[1, len]`.
    pub fn list(&self, request: &ListRequest) -> &[SaleRecord] {
        let records = self.store.records();
        let count = request
            .count
            .unwrap_or(records.len())
            .max(1)
            .min(records.len());
        &records[..count]
    }

    pub fn search(&self, request: &SearchRequest) -> SearchOutcome<'_> {
        let mut hits = Vec::with_capacity(request.limit.min(self.store.len()));
        let mut total_matches = 0;

        for record in self.store.records() {
            if !request.filters.matches(record) || !request.query.matches(record) {
                continue;
            }
            total_matches += 1;
            if hits.len() < request.limit {
                hits.push(record);
            }
        }

        tracing::debug!(
            query = request.query.as_str(),
            total_matches,
            returned = hits.len(),
            "search"
        );

        SearchOutcome {
            hits,
            total_matches,
        }
    }

    pub fn fetch(&self, request: &FetchRequest) -> FetchOutcome<'_> {
        let mut seen = HashSet::with_capacity(request.ids.len());
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for raw in &request.ids {
            let id = self.resolve_locator(raw);
            if !seen.insert(id) {
                continue;
            }
            match self.store.get(id) {
                Some(record) => found.push(record),
                None => missing.push(raw.clone()),
            }
        }

        tracing::debug!(found = found.len(), missing = missing.len(), "fetch");

        FetchOutcome { found, missing }
    }

    /// Per-record locator: the dataset URI with the id as fragment.
    pub fn record_uri(&self, id: &str) -> String {
        format!("{}#{}", self.resource_uri, id)
    }

    /// Reduce a per-record locator to its id; bare ids pass through unchanged.
    pub fn resolve_locator<'a>(&self, raw: &'a str) -> &'a str {
        raw.strip_prefix(self.resource_uri.as_str())
            .and_then(|rest| rest.strip_prefix('#'))
            .unwrap_or(raw)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
