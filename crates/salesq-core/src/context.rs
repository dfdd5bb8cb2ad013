//! Serving context — one dataset, its store and engine, and the
//! validate → query → envelope pipeline for each operation.
//!
//! Contexts share nothing with each other. Build one per session with
//! [`SalesContext::generate`], or inject a fixed record sequence with
//! [`SalesContext::from_store`].

use crate::config::Config;
use crate::error::ValidationError;
use crate::generator::DatasetGenerator;
use crate::query::QueryEngine;
use crate::request::{FetchParams, ListParams, SearchParams};
use crate::response::{FetchEnvelope, ListEnvelope, ResponseBuilder, SearchEnvelope};
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct SalesContext {
    engine: QueryEngine,
}

impl SalesContext {
    /// Generate a fresh dataset as described by `config`.
    pub fn generate(config: &Config) -> Self {
        let dataset =
            DatasetGenerator::new(config.dataset.window_days).generate(config.dataset.records);
        Self::from_store(RecordStore::new(dataset), config.resource.uri.clone())
    }

    pub fn from_store(store: RecordStore, resource_uri: impl Into<String>) -> Self {
        Self {
            engine: QueryEngine::new(store, resource_uri),
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    fn responses(&self) -> ResponseBuilder<'_> {
        ResponseBuilder::new(&self.engine)
    }

    pub fn list(&self, params: ListParams) -> Result<ListEnvelope, ValidationError> {
        let request = params.validate(self.engine.store().len())?;
        Ok(self.responses().list(self.engine.list(&request)))
    }

    pub fn search(&self, params: SearchParams) -> Result<SearchEnvelope, ValidationError> {
        let request = params.validate()?;
        let outcome = self.engine.search(&request);
        Ok(self.responses().search(&request.query, &outcome))
    }

    pub fn fetch(&self, params: FetchParams) -> Result<FetchEnvelope, ValidationError> {
        let request = params.validate()?;
        let outcome = self.engine.fetch(&request);
        Ok(self.responses().fetch(&outcome))
    }
}
