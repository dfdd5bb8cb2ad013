#![allow(dead_code)]
//! Domain-specific assertion macros for salesq harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record or envelope invariant was violated.

use salesq_core::types::round_cents;
use salesq_core::SaleRecord;

// ---------------------------------------------------------------------------
// Id assertions
// ---------------------------------------------------------------------------

/// Assert that a sequence of records carries exactly the given ids, in order.
///
/// ```rust
/// assert_ids!(outcome.found, ["SALE-0001", "SALE-0004"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($records:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $records.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "record ids differ");
    }};
}

/// Assert that a JSON envelope carries the synthetic-data disclaimer.
#[macro_export]
macro_rules! assert_has_note {
    ($envelope:expr) => {{
        let envelope: &serde_json::Value = &$envelope;
        match envelope.get("note").and_then(|n| n.as_str()) {
            Some(note) if note == salesq_core::SYNTHETIC_NOTE => {}
            Some(other) => panic!("assert_has_note! failed: unexpected note {other:?}"),
            None => panic!("assert_has_note! failed: no note in {envelope}"),
        }
    }};
}

// ---------------------------------------------------------------------------
// Record invariants
// ---------------------------------------------------------------------------

/// Assert the schema invariants every record must satisfy.
pub fn assert_record_valid(record: &SaleRecord) {
    assert!(
        (1..=25).contains(&record.quantity),
        "quantity out of range: {record:?}"
    );
    assert!(
        (50..=750).contains(&record.unit_price),
        "unit price out of range: {record:?}"
    );
    assert_eq!(
        record.total_amount,
        round_cents(f64::from(record.quantity) * f64::from(record.unit_price)),
        "total is not quantity * unit price: {record:?}"
    );
    assert!(
        record.id.len() == 9 && record.id.starts_with("SALE-"),
        "malformed id: {:?}",
        record.id
    );
}
