//! Parameters describing the fleet and the digitization project.

use crate::error::ParameterError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete set of inputs for one ROI evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputParameters {
    /// Number of vehicles in the fleet.
    pub fleet_size: u32,
    /// Fuel consumed by the fleet, in liters per month.
    pub fuel_volume: Decimal,
    /// Monthly base salary of the staff, in USD.
    pub base_salary: Decimal,
    /// Staff hours saved per month thanks to digitization.
    pub man_hours_saved: Decimal,
    /// One-time digitization investment, in USD.
    pub digitization_cost: Decimal,
    /// Operational savings per month, in USD.
    pub monthly_savings: Decimal,
    /// Fuel price, in USD per liter.
    pub fuel_cost_per_liter: Decimal,
    /// Fuel efficiency before digitization, in km/l.
    pub baseline_efficiency: Decimal,
    /// Fuel efficiency after digitization, in km/l.
    pub improved_efficiency: Decimal,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            fleet_size: 50,
            fuel_volume: Decimal::from(100_000),
            base_salary: Decimal::from(5_000),
            man_hours_saved: Decimal::from(160),
            digitization_cost: Decimal::from(20_000),
            monthly_savings: Decimal::from(5_000),
            fuel_cost_per_liter: Decimal::new(15, 1), // 1.5
            baseline_efficiency: Decimal::new(40, 1), // 4.0
            improved_efficiency: Decimal::new(50, 1), // 5.0
        }
    }
}

impl InputParameters {
    /// Checks the minimum bounds of every field.
    ///
    /// # Errors
    /// Returns the first violated bound: a fleet size below one or a
    /// negative numeric field.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.fleet_size < 1 {
            return Err(ParameterError::FleetSizeTooSmall(self.fleet_size));
        }

        for (field, value) in self.numeric_fields() {
            if value < Decimal::ZERO {
                return Err(ParameterError::Negative { field, value });
            }
        }

        Ok(())
    }

    fn numeric_fields(&self) -> [(&'static str, Decimal); 8] {
        [
            ("fuel_volume", self.fuel_volume),
            ("base_salary", self.base_salary),
            ("man_hours_saved", self.man_hours_saved),
            ("digitization_cost", self.digitization_cost),
            ("monthly_savings", self.monthly_savings),
            ("fuel_cost_per_liter", self.fuel_cost_per_liter),
            ("baseline_efficiency", self.baseline_efficiency),
            ("improved_efficiency", self.improved_efficiency),
        ]
    }
}

/// A sparse set of parameters, as read from a file or the command line.
///
/// Layers are combined with [`PartialParameters::or`] and completed with
/// [`PartialParameters::resolve`], which fills the gaps from
/// [`InputParameters::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialParameters {
    pub fleet_size: Option<u32>,
    pub fuel_volume: Option<Decimal>,
    pub base_salary: Option<Decimal>,
    pub man_hours_saved: Option<Decimal>,
    pub digitization_cost: Option<Decimal>,
    pub monthly_savings: Option<Decimal>,
    pub fuel_cost_per_liter: Option<Decimal>,
    pub baseline_efficiency: Option<Decimal>,
    pub improved_efficiency: Option<Decimal>,
}

impl PartialParameters {
    /// Keeps the values set on `self`, taking the rest from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            fleet_size: self.fleet_size.or(fallback.fleet_size),
            fuel_volume: self.fuel_volume.or(fallback.fuel_volume),
            base_salary: self.base_salary.or(fallback.base_salary),
            man_hours_saved: self.man_hours_saved.or(fallback.man_hours_saved),
            digitization_cost: self.digitization_cost.or(fallback.digitization_cost),
            monthly_savings: self.monthly_savings.or(fallback.monthly_savings),
            fuel_cost_per_liter: self.fuel_cost_per_liter.or(fallback.fuel_cost_per_liter),
            baseline_efficiency: self.baseline_efficiency.or(fallback.baseline_efficiency),
            improved_efficiency: self.improved_efficiency.or(fallback.improved_efficiency),
        }
    }

    /// Fills every unset field with its default value.
    #[must_use]
    pub fn resolve(self) -> InputParameters {
        let defaults = InputParameters::default();
        InputParameters {
            fleet_size: self.fleet_size.unwrap_or(defaults.fleet_size),
            fuel_volume: self.fuel_volume.unwrap_or(defaults.fuel_volume),
            base_salary: self.base_salary.unwrap_or(defaults.base_salary),
            man_hours_saved: self.man_hours_saved.unwrap_or(defaults.man_hours_saved),
            digitization_cost: self.digitization_cost.unwrap_or(defaults.digitization_cost),
            monthly_savings: self.monthly_savings.unwrap_or(defaults.monthly_savings),
            fuel_cost_per_liter: self
                .fuel_cost_per_liter
                .unwrap_or(defaults.fuel_cost_per_liter),
            baseline_efficiency: self
                .baseline_efficiency
                .unwrap_or(defaults.baseline_efficiency),
            improved_efficiency: self
                .improved_efficiency
                .unwrap_or(defaults.improved_efficiency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_pass_validation() {
        assert!(InputParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fleet() {
        let params = InputParameters {
            fleet_size: 0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::FleetSizeTooSmall(0))
        );
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let params = InputParameters {
            fuel_cost_per_liter: dec!(-0.5),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::Negative {
                field: "fuel_cost_per_liter",
                value: dec!(-0.5),
            })
        );
    }

    #[test]
    fn test_zero_values_are_within_bounds() {
        let params = InputParameters {
            fuel_volume: Decimal::ZERO,
            digitization_cost: Decimal::ZERO,
            baseline_efficiency: Decimal::ZERO,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_layers_prefer_first_value() {
        let flags = PartialParameters {
            fleet_size: Some(120),
            ..Default::default()
        };
        let file = PartialParameters {
            fleet_size: Some(80),
            base_salary: Some(dec!(4200)),
            ..Default::default()
        };

        let params = flags.or(file).resolve();
        assert_eq!(params.fleet_size, 120);
        assert_eq!(params.base_salary, dec!(4200));
        assert_eq!(params.man_hours_saved, dec!(160));
    }

    #[test]
    fn test_empty_partial_resolves_to_defaults() {
        assert_eq!(
            PartialParameters::default().resolve(),
            InputParameters::default()
        );
    }

    #[test]
    fn test_partial_deserializes_missing_fields_as_none() {
        let partial: PartialParameters =
            serde_json::from_str(r#"{ "fleet_size": 75, "digitization_cost": "30000" }"#)
                .unwrap();
        assert_eq!(partial.fleet_size, Some(75));
        assert_eq!(partial.digitization_cost, Some(dec!(30000)));
        assert_eq!(partial.fuel_volume, None);
    }

    #[test]
    fn test_partial_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<PartialParameters>(r#"{ "fleet": 75 }"#);
        assert!(parsed.is_err());
    }
}
