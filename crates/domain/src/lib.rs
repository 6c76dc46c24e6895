//! Core domain model for the fleet digitization ROI calculator.
//!
//! The crate is free of I/O: every function maps plain values to plain
//! values, so the same inputs always produce bit-identical outputs.

pub mod entities;
pub mod error;
pub mod math;
pub mod metrics;
pub mod prediction;
pub mod prelude;
pub mod reference;
pub mod value_objects;
