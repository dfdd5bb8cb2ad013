//! Core types for salesq-core.
//!
//! This module defines the single entity the service exposes, the
//! [`SaleRecord`], together with its two closed enumerations ([`Region`] and
//! [`SaleStatus`]) and the fixed customer/product catalogs the generator
//! draws from.

use chrono::{DateTime, Utc};
use phf::phf_map;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

/// Customer names the generator draws from.
pub const CUSTOMERS: &[&str] = &[
    "Acme Corporation",
    "Globex Industries",
    "Initech",
    "Umbrella Retail",
    "Stark Logistics",
    "Wayne Enterprises",
    "Hooli",
    "Soylent Foods",
];

/// Product names the generator draws from.
pub const PRODUCTS: &[&str] = &[
    "Laptop Pro 14",
    "Wireless Mouse",
    "4K Monitor",
    "Mechanical Keyboard",
    "USB-C Dock",
    "Noise-Cancelling Headset",
    "Office Chair",
    "Standing Desk",
];

/// Inclusive bounds for [`SaleRecord::quantity`].
pub const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 1..=25;

/// Inclusive bounds for [`SaleRecord::unit_price`].
pub const UNIT_PRICE_RANGE: std::ops::RangeInclusive<u32> = 50..=750;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Sales region. Exactly five values; filter input outside this set is a
/// validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Norte,
    Sur,
    Este,
    Oeste,
    Centro,
}

static REGION_NAMES: phf::Map<&'static str, Region> = phf_map! {
    "Norte" => Region::Norte,
    "Sur" => Region::Sur,
    "Este" => Region::Este,
    "Oeste" => Region::Oeste,
    "Centro" => Region::Centro,
};

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Norte,
        Region::Sur,
        Region::Este,
        Region::Oeste,
        Region::Centro,
    ];

    /// Exact, case-sensitive lookup of a region name.
    pub fn from_name(name: &str) -> Option<Region> {
        REGION_NAMES.get(name).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Sur => "Sur",
            Region::Este => "Este",
            Region::Oeste => "Oeste",
            Region::Centro => "Centro",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SaleStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

static STATUS_NAMES: phf::Map<&'static str, SaleStatus> = phf_map! {
    "Completed" => SaleStatus::Completed,
    "Pending" => SaleStatus::Pending,
    "Cancelled" => SaleStatus::Cancelled,
};

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Completed,
        SaleStatus::Pending,
        SaleStatus::Cancelled,
    ];

    /// Exact, case-sensitive lookup of a status name.
    pub fn from_name(name: &str) -> Option<SaleStatus> {
        STATUS_NAMES.get(name).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "Completed",
            SaleStatus::Pending => "Pending",
            SaleStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SaleRecord
// ---------------------------------------------------------------------------

/// One synthetic sales transaction.
///
/// `total_amount` is derived from `quantity * unit_price` at construction and
/// is never set independently; use [`SaleRecord::new`] to build records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// `SALE-NNNN`, 1-based and zero-padded to four digits.
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub region: Region,
    pub quantity: u32,
    pub unit_price: u32,
    /// `quantity * unit_price`, rounded to cents.
    pub total_amount: f64,
    pub sale_date: DateTime<Utc>,
    pub status: SaleStatus,
}

impl SaleRecord {
    /// Build the record at 1-based position `seq` in its dataset.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seq: usize,
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        region: Region,
        quantity: u32,
        unit_price: u32,
        sale_date: DateTime<Utc>,
        status: SaleStatus,
    ) -> Self {
        Self {
            id: record_id(seq),
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            region,
            quantity,
            unit_price,
            total_amount: round_cents(f64::from(quantity) * f64::from(unit_price)),
            sale_date,
            status,
        }
    }

    /// Lowercased projection matched by free-text search: customer, product,
    /// region and status, space-joined in that order.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.customer_name, self.product_name, self.region, self.status
        )
        .to_lowercase()
    }
}

/// Format the identifier for the record at 1-based position `seq`.
pub fn record_id(seq: usize) -> String {
    format!("SALE-{seq:04}")
}

/// Round a monetary amount to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
