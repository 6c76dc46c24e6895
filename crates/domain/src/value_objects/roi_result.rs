use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial metrics derived from one set of input parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Base salary spread over a 160-hour month.
    pub hourly_rate: Decimal,
    /// Value of the saved man hours.
    pub cost_savings: Decimal,
    /// Value of the fuel no longer burned each month.
    pub fuel_savings: Decimal,
    /// Sum of labor, operational and fuel savings.
    pub total_savings: Decimal,
    /// Return on the digitization investment, in percent.
    pub roi_percent: Decimal,
}

impl RoiResult {
    /// The "no savings" result.
    pub const ZERO: Self = Self {
        hourly_rate: Decimal::ZERO,
        cost_savings: Decimal::ZERO,
        fuel_savings: Decimal::ZERO,
        total_savings: Decimal::ZERO,
        roi_percent: Decimal::ZERO,
    };

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
