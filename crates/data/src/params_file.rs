//! JSON parameter files.
//!
//! A parameter file is a JSON object with any subset of the input fields:
//!
//! ```json
//! { "fleet_size": 120, "fuel_cost_per_liter": 1.35 }
//! ```
//!
//! Missing fields are left unset so that other layers (flags, defaults)
//! can fill them.

use crate::error::DataError;
use fleet_roi_domain::entities::PartialParameters;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a parameter file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or
/// contains unknown fields.
pub fn load_parameters(path: &Path) -> Result<PartialParameters, DataError> {
    let contents = fs::read_to_string(path)?;
    let params: PartialParameters = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), ?params, "Loaded parameter file");
    Ok(params)
}
