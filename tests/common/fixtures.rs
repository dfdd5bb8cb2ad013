#![allow(dead_code)]
//! Static record corpora used across harnesses.
//!
//! Each corpus row is `(customer, product, region, status, quantity,
//! unit_price)`; ids follow row order starting at `SALE-0001`.

use salesq_core::{Region, SaleRecord, SaleStatus};

use super::builders::SaleRecordBuilder;

type Row = (&'static str, &'static str, Region, SaleStatus, u32, u32);

/// Ten records mixing every region and status, with three Acme sales in
/// Norte (two of them Completed).
pub const CORPUS_MIXED: &[Row] = &[
    ("Acme Corporation", "4K Monitor", Region::Norte, SaleStatus::Completed, 2, 300),
    ("Initech", "USB-C Dock", Region::Sur, SaleStatus::Pending, 1, 80),
    ("Acme Corporation", "Office Chair", Region::Norte, SaleStatus::Cancelled, 5, 150),
    ("Hooli", "Laptop Pro 14", Region::Este, SaleStatus::Completed, 3, 700),
    ("Globex Industries", "Standing Desk", Region::Centro, SaleStatus::Completed, 1, 650),
    ("Stark Logistics", "Wireless Mouse", Region::Oeste, SaleStatus::Pending, 25, 50),
    ("Acme Corporation", "Mechanical Keyboard", Region::Norte, SaleStatus::Completed, 4, 120),
    ("Wayne Enterprises", "Noise-Cancelling Headset", Region::Sur, SaleStatus::Cancelled, 2, 210),
    ("Umbrella Retail", "4K Monitor", Region::Norte, SaleStatus::Completed, 6, 310),
    ("Soylent Foods", "Office Chair", Region::Centro, SaleStatus::Pending, 12, 175),
];

pub fn corpus(rows: &[Row]) -> Vec<SaleRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, &(customer, product, region, status, quantity, unit_price))| {
            SaleRecordBuilder::new(i + 1)
                .customer(customer)
                .product(product)
                .region(region)
                .status(status)
                .quantity(quantity)
                .unit_price(unit_price)
                .build()
        })
        .collect()
}

pub fn mixed_corpus() -> Vec<SaleRecord> {
    corpus(CORPUS_MIXED)
}
