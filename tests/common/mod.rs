//! Shared test utilities for salesq integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders produce deterministic stores by injecting
//! record sequences instead of relying on random generation.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
