//! Static illustrative content shown next to the live results.
//!
//! Neither the cost breakdown nor the scenarios depend on the inputs.

use rust_decimal::Decimal;
use serde::Serialize;

/// One slice of the digitization budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostComponent {
    pub name: &'static str,
    pub amount: Decimal,
}

impl CostComponent {
    /// Share of `total` taken by this component, in percent.
    ///
    /// Zero when `total` is zero.
    #[must_use]
    pub fn share_of(&self, total: Decimal) -> Decimal {
        if total.is_zero() {
            return Decimal::ZERO;
        }
        self.amount / total * Decimal::ONE_HUNDRED
    }
}

/// Typical split of a digitization budget.
#[must_use]
pub fn cost_breakdown() -> [CostComponent; 4] {
    [
        CostComponent {
            name: "Software",
            amount: Decimal::from(8_000),
        },
        CostComponent {
            name: "Hardware",
            amount: Decimal::from(5_000),
        },
        CostComponent {
            name: "Training",
            amount: Decimal::from(2_000),
        },
        CostComponent {
            name: "Implementation",
            amount: Decimal::from(5_000),
        },
    ]
}

/// Sum of a set of cost components.
#[must_use]
pub fn total_cost(components: &[CostComponent]) -> Decimal {
    components.iter().map(|c| c.amount).sum()
}

/// A sample deployment used for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub fleet_size: u32,
    pub digitization_cost: Decimal,
    pub roi_percent: Decimal,
}

/// Sample deployments of increasing size.
#[must_use]
pub fn scenarios() -> [Scenario; 3] {
    [
        Scenario {
            name: "Scenario 1",
            fleet_size: 50,
            digitization_cost: Decimal::from(20_000),
            roi_percent: Decimal::from(50),
        },
        Scenario {
            name: "Scenario 2",
            fleet_size: 100,
            digitization_cost: Decimal::from(40_000),
            roi_percent: Decimal::from(75),
        },
        Scenario {
            name: "Scenario 3",
            fleet_size: 200,
            digitization_cost: Decimal::from(60_000),
            roi_percent: Decimal::from(100),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::InputParameters;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_matches_default_budget() {
        let components = cost_breakdown();
        assert_eq!(total_cost(&components), dec!(20000));
        assert_eq!(
            total_cost(&components),
            InputParameters::default().digitization_cost
        );
    }

    #[test]
    fn test_breakdown_shares() {
        let components = cost_breakdown();
        let total = total_cost(&components);

        assert_eq!(components[0].share_of(total), dec!(40));
        assert_eq!(components[2].share_of(total), dec!(10));

        let sum: Decimal = components.iter().map(|c| c.share_of(total)).sum();
        assert_eq!(sum, dec!(100));
    }

    #[test]
    fn test_share_of_empty_budget() {
        let component = cost_breakdown()[0];
        assert_eq!(component.share_of(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_scenarios_are_ordered_by_fleet() {
        let rows = scenarios();
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].fleet_size < w[1].fleet_size));
        assert_eq!(rows[1].digitization_cost, dec!(40000));
        assert_eq!(rows[2].roi_percent, dec!(100));
    }
}
