//! File formats for the fleet ROI calculator.
//!
//! This crate turns domain values into files and back: the CSV results
//! table offered for download and the JSON parameter files accepted as
//! input.

mod error;
pub mod export;
pub mod params_file;

pub use error::DataError;
pub use export::{DEFAULT_EXPORT_FILE, ResultParameter, ResultRow, ResultsTable};
pub use params_file::load_parameters;
