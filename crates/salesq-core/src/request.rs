//! Request boundary — raw operation parameters and their validated forms.
//!
//! `*Params` types mirror the wire arguments (camelCase, every field
//! optional where the protocol allows it). `validate` turns them into the
//! `*Request` types the [`QueryEngine`](crate::QueryEngine) accepts, so range
//! and enumeration checks happen exactly once, before any query runs.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Region, SaleRecord, SaleStatus};

/// Default number of search results returned.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
/// Upper bound for the search `limit` argument.
pub const MAX_SEARCH_LIMIT: usize = 100;
/// Upper bound on the extra `ids` a single fetch may carry.
pub const MAX_EXTRA_IDS: usize = 50;

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListParams {
    #[serde(default)]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// `None` lists the whole dataset.
    pub count: Option<usize>,
}

impl ListParams {
    /// `dataset_size` is the size of the store the request will run against.
    pub fn validate(self, dataset_size: usize) -> Result<ListRequest, ValidationError> {
        let count = match self.count {
            None => None,
            Some(value) => {
                let max = dataset_size.max(1);
                match usize::try_from(value) {
                    Ok(n) if (1..=max).contains(&n) => Some(n),
                    _ => return Err(ValidationError::CountOutOfRange { value, max }),
                }
            }
        };
        Ok(ListRequest { count })
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub filters: Option<FilterParams>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterParams {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub min_total: Option<f64>,
    #[serde(default)]
    pub max_total: Option<f64>,
}

/// A non-empty free-text query, lowercased once for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        let needle = raw.to_lowercase();
        Ok(Self { raw, needle })
    }

    /// The query exactly as the caller sent it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        record.search_text().contains(&self.needle)
    }
}

/// Structured constraints, all of which must hold for a record to match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub customer: Option<String>,
    pub product: Option<String>,
    pub region: Option<Region>,
    pub status: Option<SaleStatus>,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.customer
            .as_deref()
            .is_none_or(|c| record.customer_name == c)
            && self
                .product
                .as_deref()
                .is_none_or(|p| record.product_name == p)
            && self.region.is_none_or(|r| record.region == r)
            && self.status.is_none_or(|s| record.status == s)
            && self.min_total.is_none_or(|min| record.total_amount >= min)
            && self.max_total.is_none_or(|max| record.total_amount <= max)
    }
}

impl TryFrom<FilterParams> for SearchFilters {
    type Error = ValidationError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        let region = params
            .region
            .map(|name| Region::from_name(&name).ok_or(ValidationError::UnknownRegion(name)))
            .transpose()?;
        let status = params
            .status
            .map(|name| SaleStatus::from_name(&name).ok_or(ValidationError::UnknownStatus(name)))
            .transpose()?;

        Ok(Self {
            customer: params.customer,
            product: params.product,
            region,
            status,
            min_total: params.min_total,
            max_total: params.max_total,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub filters: SearchFilters,
    pub limit: usize,
}

impl SearchParams {
    pub fn validate(self) -> Result<SearchRequest, ValidationError> {
        let query = SearchQuery::new(self.query)?;
        let filters = self
            .filters
            .map(SearchFilters::try_from)
            .transpose()?
            .unwrap_or_default();
        let limit = match self.limit {
            None => DEFAULT_SEARCH_LIMIT,
            Some(value) => match usize::try_from(value) {
                Ok(n) if (1..=MAX_SEARCH_LIMIT).contains(&n) => n,
                _ => {
                    return Err(ValidationError::LimitOutOfRange {
                        value,
                        max: MAX_SEARCH_LIMIT,
                    })
                }
            },
        };
        Ok(SearchRequest {
            query,
            filters,
            limit,
        })
    }
}

// ---------------------------------------------------------------------------
// fetch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FetchParams {
    pub id: String,
    #[serde(default)]
    pub ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Primary id followed by the extra ids, as supplied (not yet deduplicated).
    pub ids: Vec<String>,
}

impl FetchParams {
    pub fn validate(self) -> Result<FetchRequest, ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        let extra = self.ids.unwrap_or_default();
        if extra.len() > MAX_EXTRA_IDS {
            return Err(ValidationError::TooManyIds {
                count: extra.len(),
                max: MAX_EXTRA_IDS,
            });
        }
        if let Some(index) = extra.iter().position(String::is_empty) {
            return Err(ValidationError::EmptyExtraId { index });
        }

        let mut ids = Vec::with_capacity(extra.len() + 1);
        ids.push(self.id);
        ids.extend(extra);
        Ok(FetchRequest { ids })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
