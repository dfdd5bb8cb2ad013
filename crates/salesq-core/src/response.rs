//! Response builder — wraps query outcomes in the uniform envelopes returned
//! to callers.
//!
//! Every envelope carries the dataset generation timestamp and the
//! [`SYNTHETIC_NOTE`] disclaimer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{FetchOutcome, QueryEngine, SearchOutcome};
use crate::request::SearchQuery;
use crate::types::SaleRecord;

/// Disclaimer attached to every envelope.
pub const SYNTHETIC_NOTE: &str =
    "Synthetic demo data: every record is randomly generated and does not describe real customers or sales.";

/// Relevance score given to every search hit; results are not ranked.
pub const CONSTANT_SCORE: f64 = 1.0;

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope {
    pub generated_at: DateTime<Utc>,
    /// Number of records in this envelope.
    pub total: usize,
    pub records: Vec<SaleRecord>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub uri: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    pub generated_at: DateTime<Utc>,
    pub query: String,
    pub results: Vec<SearchHit>,
    pub total_matches: usize,
    pub returned: usize,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchEnvelope {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<SaleRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    pub note: String,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds envelopes stamped with one engine's generation time and locators.
#[derive(Debug, Clone, Copy)]
pub struct ResponseBuilder<'a> {
    engine: &'a QueryEngine,
}

impl<'a> ResponseBuilder<'a> {
    pub fn new(engine: &'a QueryEngine) -> Self {
        Self { engine }
    }

    fn generated_at(&self) -> DateTime<Utc> {
        self.engine.store().generated_at()
    }

    pub fn list(&self, records: &[SaleRecord]) -> ListEnvelope {
        ListEnvelope {
            generated_at: self.generated_at(),
            total: records.len(),
            records: records.to_vec(),
            note: SYNTHETIC_NOTE.to_string(),
        }
    }

    pub fn search(&self, query: &SearchQuery, outcome: &SearchOutcome<'_>) -> SearchEnvelope {
        let results: Vec<SearchHit> = outcome.hits.iter().map(|r| self.hit(r)).collect();
        SearchEnvelope {
            generated_at: self.generated_at(),
            query: query.as_str().to_string(),
            returned: results.len(),
            total_matches: outcome.total_matches,
            results,
            note: SYNTHETIC_NOTE.to_string(),
        }
    }

    pub fn fetch(&self, outcome: &FetchOutcome<'_>) -> FetchEnvelope {
        FetchEnvelope {
            generated_at: self.generated_at(),
            records: outcome.found.iter().map(|&r| r.clone()).collect(),
            missing: outcome.missing.clone(),
            note: SYNTHETIC_NOTE.to_string(),
        }
    }

    fn hit(&self, record: &SaleRecord) -> SearchHit {
        SearchHit {
            id: record.id.clone(),
            title: format!(
                "{}: {} x {} for {}",
                record.id, record.quantity, record.product_name, record.customer_name
            ),
            snippet: format!(
                "{} | {} | total {:.2} | {}",
                record.region,
                record.status,
                record.total_amount,
                record.sale_date.format("%Y-%m-%d"),
            ),
            uri: self.engine.record_uri(&record.id),
            score: CONSTANT_SCORE,
        }
    }
}
