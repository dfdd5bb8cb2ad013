#![allow(dead_code)]
//! Test builders — ergonomic constructors for `SaleRecord` and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use salesq_core::types::{CUSTOMERS, PRODUCTS};
use salesq_core::{QueryEngine, Region, RecordStore, SaleRecord, SaleStatus, SalesContext};

pub const RESOURCE_URI: &str = "sales://dataset";

// ---------------------------------------------------------------------------
// SaleRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SaleRecord`] test fixtures. Fields left unset get a
/// random but schema-valid value.
///
/// # Example
///
/// ```rust
/// let record = SaleRecordBuilder::new(1)
///     .customer("Acme Corporation")
///     .region(Region::Norte)
///     .status(SaleStatus::Completed)
///     .build();
/// ```
pub struct SaleRecordBuilder {
    seq: usize,
    customer: String,
    product: String,
    region: Region,
    quantity: u32,
    unit_price: u32,
    sale_date: DateTime<Utc>,
    status: SaleStatus,
}

impl SaleRecordBuilder {
    pub fn new(seq: usize) -> Self {
        let customer = CUSTOMERS[(0..CUSTOMERS.len()).fake::<usize>()];
        let product = PRODUCTS[(0..PRODUCTS.len()).fake::<usize>()];
        Self {
            seq,
            customer: customer.to_string(),
            product: product.to_string(),
            region: Region::ALL[(0..Region::ALL.len()).fake::<usize>()],
            quantity: (1..=25u32).fake(),
            unit_price: (50..=750u32).fake(),
            sale_date: fixed_now() - Duration::seconds((0..86_400 * 120i64).fake::<i64>()),
            status: SaleStatus::ALL[(0..SaleStatus::ALL.len()).fake::<usize>()],
        }
    }

    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn status(mut self, status: SaleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_price(mut self, unit_price: u32) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn build(self) -> SaleRecord {
        SaleRecord::new(
            self.seq,
            self.customer,
            self.product,
            self.region,
            self.quantity,
            self.unit_price,
            self.sale_date,
            self.status,
        )
    }
}

// ---------------------------------------------------------------------------
// Store / context constructors
// ---------------------------------------------------------------------------

/// The generation instant every builder-made store reports.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// `n` random records with sequential ids.
pub fn random_records(n: usize) -> Vec<SaleRecord> {
    (1..=n).map(|seq| SaleRecordBuilder::new(seq).build()).collect()
}

pub fn store_of(records: Vec<SaleRecord>) -> RecordStore {
    RecordStore::from_records(records, fixed_now())
}

pub fn engine_of(records: Vec<SaleRecord>) -> QueryEngine {
    QueryEngine::new(store_of(records), RESOURCE_URI)
}

pub fn context_of(records: Vec<SaleRecord>) -> SalesContext {
    SalesContext::from_store(store_of(records), RESOURCE_URI)
}
