//! salesq-core — in-memory query engine over a synthetic sales dataset.
//!
//! This crate exposes the four pipeline layers as public modules, plus the
//! request boundary, configuration and shared types.
//!
//! # Architecture
//!
//! ```text
//! Generator ──► Store ──► Query Engine ──► Response Builder
//!                              ▲
//!                 request validation
//! ```
//!
//! A [`SalesContext`] owns one dataset for its whole life. Nothing in this
//! crate is mutated after construction, so a context can be shared across
//! threads behind an `Arc` without locking.

pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod query;
pub mod request;
pub mod response;
pub mod store;
pub mod types;

pub use context::SalesContext;
pub use error::{ConfigError, ValidationError};
pub use generator::{Dataset, DatasetGenerator};
pub use query::{FetchOutcome, QueryEngine, SearchOutcome};
pub use request::{
    FetchParams, FetchRequest, FilterParams, ListParams, ListRequest, SearchFilters, SearchParams,
    SearchQuery, SearchRequest,
};
pub use response::{
    FetchEnvelope, ListEnvelope, ResponseBuilder, SearchEnvelope, SearchHit, SYNTHETIC_NOTE,
};
pub use store::RecordStore;
pub use types::{Region, SaleRecord, SaleStatus};
