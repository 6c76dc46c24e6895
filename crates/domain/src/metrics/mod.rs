//! Financial metrics computed from the input parameters.

pub mod roi;

pub use roi::{CalculationNote, RoiCalculation, compute, compute_with_notes};
