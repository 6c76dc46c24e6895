//! Text and JSON rendering of the calculator output.

use fleet_roi_domain::entities::InputParameters;
use fleet_roi_domain::metrics::CalculationNote;
use fleet_roi_domain::reference::{CostComponent, Scenario, total_cost};
use fleet_roi_domain::value_objects::RoiResult;
use prettytable::{Table, format, row};
use rust_decimal::Decimal;
use serde::Serialize;

pub const TITLE: &str = "Advanced ROI Calculator for Mining Operations";

pub const GUIDE: &str = "\
How to Use:
  - Adjust the input parameters with flags (see `fleet-roi report --help`),
    FLEET_ROI_* environment variables or a JSON file passed with --params.
  - View detailed results, the cost breakdown and scenario comparisons
    with `fleet-roi report`.
  - Export results as a CSV file with `fleet-roi export` or
    `fleet-roi report --export <path>`.";

/// Machine-readable form of a full report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub parameters: &'a InputParameters,
    pub result: &'a RoiResult,
    pub notes: &'a [CalculationNote],
    pub predicted_roi: Decimal,
}

pub fn heading(text: &str) -> String {
    format!("{text}\n{}", "═".repeat(text.chars().count()))
}

/// The results block, currency and percentages to two decimals.
pub fn results_section(params: &InputParameters, result: &RoiResult) -> String {
    [
        heading("Results"),
        format!("Man Hours Saved Per Month: {} hours", params.man_hours_saved),
        format!("Equivalent Cost Savings:   ${:.2}", result.cost_savings),
        format!("Fuel Cost Savings:         ${:.2}", result.fuel_savings),
        format!("Total Savings:             ${:.2}", result.total_savings),
        format!("ROI on Digitization:       {:.2}%", result.roi_percent),
    ]
    .join("\n")
}

/// Cost components with their share of the total budget.
pub fn breakdown_table(components: &[CostComponent]) -> String {
    let total = total_cost(components);

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Component", "Amount (USD)", "Share"]);
    for component in components {
        table.add_row(row![
            component.name,
            r->format!("{:.2}", component.amount),
            r->format!("{:.1}%", component.share_of(total)),
        ]);
    }
    table.add_row(row!["Total", r->format!("{total:.2}"), r->"100.0%"]);

    format!("{}\n{}", heading("Digitization Cost Breakdown"), table)
}

pub fn scenario_table(scenarios: &[Scenario]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Scenario", "Fleet Size", "Digitization Cost", "ROI (%)"]);
    for scenario in scenarios {
        table.add_row(row![
            scenario.name,
            r->scenario.fleet_size,
            r->scenario.digitization_cost,
            r->scenario.roi_percent,
        ]);
    }

    format!("{}\n{}", heading("Scenario Comparison"), table)
}

pub fn prediction_line(fleet_size: u32, predicted_roi: Decimal) -> String {
    format!("Predicted ROI for a fleet size of {fleet_size}: {predicted_roi:.2}%")
}
