//! Store — immutable in-memory index of [`SaleRecord`](crate::SaleRecord) values.
//!
//! The store is the single source of truth for a serving context; it is built
//! once from a [`Dataset`] and never mutated afterwards, so shared references
//! to it can be read from any number of callers without coordination.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::generator::Dataset;
use crate::types::SaleRecord;

#[derive(Debug, Clone)]
pub struct RecordStore {
    generated_at: DateTime<Utc>,
    records: Vec<SaleRecord>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    /// Index a generated dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self::from_records(dataset.records, dataset.generated_at)
    }

    /// Index a pre-built record sequence. If an id repeats, lookups resolve
    /// to its first occurrence.
    pub fn from_records(records: Vec<SaleRecord>, generated_at: DateTime<Utc>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            by_id.entry(record.id.clone()).or_insert(pos);
        }
        Self {
            generated_at,
            records,
            by_id,
        }
    }

    pub fn get(&self, id: &str) -> Option<&SaleRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    /// All records in generation order.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
