//! Dataset generator — produces the synthetic sale records a serving context
//! is built from.
//!
//! Every field is drawn independently and uniformly. The RNG is not seeded in
//! [`DatasetGenerator::generate`]; tests that need fixed output pass their own
//! RNG and clock to [`DatasetGenerator::generate_with`].

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::Rng;

use crate::types::{
    Region, SaleRecord, SaleStatus, CUSTOMERS, PRODUCTS, QUANTITY_RANGE, UNIT_PRICE_RANGE,
};

/// Default width of the sale-date window.
pub const DEFAULT_WINDOW_DAYS: u32 = 120;

/// The full ordered output of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// The instant the window ends at; no record is dated after it.
    pub generated_at: DateTime<Utc>,
    pub records: Vec<SaleRecord>,
}

#[derive(Debug, Clone, Copy)]
pub struct DatasetGenerator {
    window_days: u32,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl DatasetGenerator {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Generate `count` records ending at the current instant.
    pub fn generate(&self, count: usize) -> Dataset {
        self.generate_with(count, Utc::now(), &mut rand::rng())
    }

    /// Generate `count` records with ids `SALE-0001..` whose sale dates fall
    /// within the window ending at `now`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        count: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Dataset {
        // Whole seconds, so every drawn offset keeps second granularity and
        // stays at or before the generation instant.
        let generated_at = now.trunc_subsecs(0);
        let window_secs = Duration::days(i64::from(self.window_days)).num_seconds();

        let records = (1..=count)
            .map(|seq| {
                let customer = CUSTOMERS[rng.random_range(0..CUSTOMERS.len())];
                let product = PRODUCTS[rng.random_range(0..PRODUCTS.len())];
                let region = Region::ALL[rng.random_range(0..Region::ALL.len())];
                let status = SaleStatus::ALL[rng.random_range(0..SaleStatus::ALL.len())];
                let quantity = rng.random_range(QUANTITY_RANGE);
                let unit_price = rng.random_range(UNIT_PRICE_RANGE);
                let sale_date = generated_at - Duration::seconds(rng.random_range(0..=window_secs));

                SaleRecord::new(
                    seq, customer, product, region, quantity, unit_price, sale_date, status,
                )
            })
            .collect();

        tracing::debug!(count, window_days = self.window_days, "generated sales dataset");

        Dataset {
            generated_at,
            records,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
