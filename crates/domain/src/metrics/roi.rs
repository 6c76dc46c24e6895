//! Return on investment of a fleet digitization project.
//!
//! The calculation never fails. Whenever a metric cannot be evaluated
//! (a zero divisor or a value outside the decimal range) that metric is
//! reported as zero and a [`CalculationNote`] records the substitution.

use crate::entities::InputParameters;
use crate::value_objects::RoiResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Working hours in a standard month.
pub const HOURS_PER_MONTH: u32 = 160;

/// Records a sentinel substituted during a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationNote {
    /// Salary or saved hours were zero; the whole result is zero.
    NoLaborSavings,
    /// An efficiency was zero; fuel savings reported as zero.
    ZeroEfficiency,
    /// The investment was zero; ROI reported as zero.
    ZeroDigitizationCost,
    /// A metric overflowed the decimal range and was reported as zero.
    Overflow,
}

impl CalculationNote {
    /// Human-readable explanation of the substitution.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NoLaborSavings => {
                "base salary or man hours saved is zero, no savings computed"
            }
            Self::ZeroEfficiency => "an efficiency value is zero, fuel savings reported as 0",
            Self::ZeroDigitizationCost => "digitization cost is zero, ROI reported as 0",
            Self::Overflow => "a metric exceeded the decimal range and was reported as 0",
        }
    }
}

/// A result together with the sentinels used to produce it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiCalculation {
    pub result: RoiResult,
    pub notes: Vec<CalculationNote>,
}

/// Computes the ROI metrics for the given parameters.
#[must_use]
pub fn compute(params: &InputParameters) -> RoiResult {
    compute_with_notes(params).result
}

/// Computes the ROI metrics and reports every substituted sentinel.
#[must_use]
pub fn compute_with_notes(params: &InputParameters) -> RoiCalculation {
    if params.base_salary <= Decimal::ZERO || params.man_hours_saved <= Decimal::ZERO {
        return RoiCalculation {
            result: RoiResult::ZERO,
            notes: vec![CalculationNote::NoLaborSavings],
        };
    }

    let mut notes = Vec::new();

    let hourly_rate = params.base_salary / Decimal::from(HOURS_PER_MONTH);
    let cost_savings = params
        .man_hours_saved
        .checked_mul(hourly_rate)
        .unwrap_or_else(|| overflowed(&mut notes));

    let fuel_savings = match fuel_savings(params) {
        Ok(value) => value,
        Err(note) => {
            notes.push(note);
            Decimal::ZERO
        }
    };

    let total_savings = cost_savings
        .checked_add(params.monthly_savings)
        .and_then(|sum| sum.checked_add(fuel_savings))
        .unwrap_or_else(|| overflowed(&mut notes));

    let roi_percent = match roi_percent(total_savings, params.digitization_cost) {
        Ok(value) => value,
        Err(note) => {
            notes.push(note);
            Decimal::ZERO
        }
    };

    RoiCalculation {
        result: RoiResult {
            hourly_rate,
            cost_savings,
            fuel_savings,
            total_savings,
            roi_percent,
        },
        notes,
    }
}

/// Monthly value of the fuel saved by the efficiency gain.
///
/// `fuel_volume * fuel_cost_per_liter * (1/baseline - 1/improved)`
fn fuel_savings(params: &InputParameters) -> Result<Decimal, CalculationNote> {
    if params.baseline_efficiency.is_zero() || params.improved_efficiency.is_zero() {
        return Err(CalculationNote::ZeroEfficiency);
    }

    let per_km = (Decimal::ONE / params.baseline_efficiency)
        - (Decimal::ONE / params.improved_efficiency);

    params
        .fuel_volume
        .checked_mul(params.fuel_cost_per_liter)
        .and_then(|spend| spend.checked_mul(per_km))
        .ok_or(CalculationNote::Overflow)
}

/// `(total_savings - digitization_cost) / digitization_cost * 100`
fn roi_percent(
    total_savings: Decimal,
    digitization_cost: Decimal,
) -> Result<Decimal, CalculationNote> {
    if digitization_cost.is_zero() {
        return Err(CalculationNote::ZeroDigitizationCost);
    }

    total_savings
        .checked_sub(digitization_cost)
        .and_then(|net| net.checked_div(digitization_cost))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(CalculationNote::Overflow)
}

fn overflowed(notes: &mut Vec<CalculationNote>) -> Decimal {
    notes.push(CalculationNote::Overflow);
    Decimal::ZERO
}
