//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use fleet_roi_domain::prelude::*;
//! ```

// Entities
pub use crate::entities::{InputParameters, PartialParameters};

// Errors
pub use crate::error::{ParameterError, RegressionError};

// Math
pub use crate::math::regression::LinearFit;

// Metrics
pub use crate::metrics::roi::{CalculationNote, RoiCalculation, compute, compute_with_notes};

// Prediction
pub use crate::prediction::RoiPredictor;

// Reference content
pub use crate::reference::{CostComponent, Scenario, cost_breakdown, scenarios, total_cost};

// Value objects
pub use crate::value_objects::RoiResult;
