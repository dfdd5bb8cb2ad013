//! Error types for salesq-core.
//!
//! The query engine itself is infallible: no matches and unknown ids are
//! ordinary results. Errors only arise at the request boundary
//! ([`ValidationError`]) and while loading configuration ([`ConfigError`]).

use thiserror::Error;

/// Malformed operation input, rejected before any query runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("limit must be between 1 and {max}, got {value}")]
    LimitOutOfRange { value: i64, max: usize },

    #[error("count must be between 1 and {max}, got {value}")]
    CountOutOfRange { value: i64, max: usize },

    #[error("unknown region {0:?}; expected one of Norte, Sur, Este, Oeste, Centro")]
    UnknownRegion(String),

    #[error("unknown status {0:?}; expected one of Completed, Pending, Cancelled")]
    UnknownStatus(String),

    #[error("id must not be empty")]
    EmptyId,

    #[error("ids[{index}] must not be empty")]
    EmptyExtraId { index: usize },

    #[error("at most {max} extra ids may be requested, got {count}")]
    TooManyIds { count: usize, max: usize },
}

/// Configuration could not be loaded or holds unusable values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("dataset.records must be between 1 and {max}, got {value}")]
    RecordCount { value: usize, max: usize },

    #[error("dataset.window_days must be at least 1")]
    EmptyWindow,

    #[error("resource.uri must not be empty")]
    EmptyResourceUri,
}
