//! CSV export of the calculation results.
//!
//! The table has a `Parameter,Value` header followed by eight rows in a
//! fixed order. Entered values are written as given; fuel savings and ROI
//! are the computed figures, unrounded.

use crate::error::DataError;
use fleet_roi_domain::entities::InputParameters;
use fleet_roi_domain::value_objects::RoiResult;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// File name offered for the download.
pub const DEFAULT_EXPORT_FILE: &str = "roi_results.csv";

const HEADER: [&str; 2] = ["Parameter", "Value"];

/// Row labels of the results table, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultParameter {
    FleetSize,
    FuelVolume,
    BaseSalary,
    ManHoursSaved,
    DigitizationCost,
    MonthlySavings,
    FuelSavings,
    RoiPercent,
}

impl ResultParameter {
    pub const ALL: [Self; 8] = [
        Self::FleetSize,
        Self::FuelVolume,
        Self::BaseSalary,
        Self::ManHoursSaved,
        Self::DigitizationCost,
        Self::MonthlySavings,
        Self::FuelSavings,
        Self::RoiPercent,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::FleetSize => "Fleet Size",
            Self::FuelVolume => "Fuel Volume",
            Self::BaseSalary => "Base Salary",
            Self::ManHoursSaved => "Man Hours Saved",
            Self::DigitizationCost => "Digitization Cost",
            Self::MonthlySavings => "Monthly Savings",
            Self::FuelSavings => "Fuel Savings",
            Self::RoiPercent => "ROI (%)",
        }
    }
}

impl fmt::Display for ResultParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResultParameter {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| DataError::UnknownParameter(s.to_string()))
    }
}

/// One `(Parameter, Value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub parameter: ResultParameter,
    pub value: Decimal,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Parameter")]
    parameter: String,
    #[serde(rename = "Value")]
    value: String,
}

/// The exported results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Builds the table for a set of inputs and their computed result.
    #[must_use]
    pub fn new(params: &InputParameters, result: &RoiResult) -> Self {
        let rows = ResultParameter::ALL
            .into_iter()
            .map(|parameter| {
                let value = match parameter {
                    ResultParameter::FleetSize => Decimal::from(params.fleet_size),
                    ResultParameter::FuelVolume => params.fuel_volume,
                    ResultParameter::BaseSalary => params.base_salary,
                    ResultParameter::ManHoursSaved => params.man_hours_saved,
                    ResultParameter::DigitizationCost => params.digitization_cost,
                    ResultParameter::MonthlySavings => params.monthly_savings,
                    ResultParameter::FuelSavings => result.fuel_savings,
                    ResultParameter::RoiPercent => result.roi_percent,
                };
                ResultRow { parameter, value }
            })
            .collect();

        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Value of the first row labelled `parameter`.
    #[must_use]
    pub fn value(&self, parameter: ResultParameter) -> Option<Decimal> {
        self.rows
            .iter()
            .find(|row| row.parameter == parameter)
            .map(|row| row.value)
    }

    /// Writes the table as CSV.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), DataError> {
        let mut csv = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv.write_record(HEADER)?;
        for row in &self.rows {
            let value = row.value.normalize().to_string();
            csv.write_record([row.parameter.label(), value.as_str()])?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Renders the table as CSV text.
    ///
    /// # Errors
    /// Returns an error if CSV encoding fails.
    pub fn to_csv_string(&self) -> Result<String, DataError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses a table previously written by [`ResultsTable::write_csv`].
    ///
    /// # Errors
    /// Returns an error on a wrong header, an unknown parameter label or a
    /// value that is not a decimal number.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut csv = csv::Reader::from_reader(reader);

        let headers = csv.headers()?;
        if headers.iter().ne(HEADER) {
            return Err(DataError::UnexpectedHeader(
                headers.iter().map(str::to_string).collect(),
            ));
        }

        let rows = csv
            .deserialize::<RawRow>()
            .map(|record| -> Result<ResultRow, DataError> {
                let raw = record?;
                let parameter = raw.parameter.parse::<ResultParameter>()?;
                let value = parse_decimal(&raw.value).ok_or_else(|| DataError::InvalidValue {
                    parameter: raw.parameter.clone(),
                    value: raw.value.clone(),
                })?;
                Ok(ResultRow { parameter, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Writes the table to a file, replacing any existing one.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<(), DataError> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))?;
        info!(path = %path.display(), rows = self.rows.len(), "Exported results");
        Ok(())
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_roi_domain::metrics::compute;
    use rust_decimal_macros::dec;

    fn default_table() -> ResultsTable {
        let params = InputParameters::default();
        ResultsTable::new(&params, &compute(&params))
    }

    #[test]
    fn test_default_csv_text() {
        let csv = default_table().to_csv_string().unwrap();

        assert_eq!(
            csv,
            "Parameter,Value\n\
             Fleet Size,50\n\
             Fuel Volume,100000\n\
             Base Salary,5000\n\
             Man Hours Saved,160\n\
             Digitization Cost,20000\n\
             Monthly Savings,5000\n\
             Fuel Savings,7500\n\
             ROI (%),-12.5\n"
        );
    }

    #[test]
    fn test_rows_follow_export_order() {
        let table = default_table();
        let labels: Vec<_> = table.rows().iter().map(|r| r.parameter).collect();
        assert_eq!(labels, ResultParameter::ALL);
        assert_eq!(table.value(ResultParameter::FuelSavings), Some(dec!(7500)));
        assert_eq!(table.value(ResultParameter::RoiPercent), Some(dec!(-12.5)));
    }

    #[test]
    fn test_csv_round_trip_keeps_precision() {
        let params = InputParameters {
            fleet_size: 37,
            fuel_cost_per_liter: dec!(1.37),
            baseline_efficiency: dec!(3),
            improved_efficiency: dec!(7),
            ..Default::default()
        };
        let table = ResultsTable::new(&params, &compute(&params));

        let csv = table.to_csv_string().unwrap();
        let parsed = ResultsTable::read_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed, table);
    }

    #[test]
    fn test_read_accepts_float_notation() {
        let csv = "Parameter,Value\nFleet Size,50\nFuel Savings,7500.0\nROI (%),-1.25e1\n";

        let table = ResultsTable::read_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.value(ResultParameter::FuelSavings), Some(dec!(7500)));
        assert_eq!(table.value(ResultParameter::RoiPercent), Some(dec!(-12.5)));
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let csv = "Name,Amount\nFleet Size,50\n";
        assert!(matches!(
            ResultsTable::read_csv(csv.as_bytes()),
            Err(DataError::UnexpectedHeader(_))
        ));
    }

    #[test]
    fn test_read_rejects_unknown_parameter() {
        let csv = "Parameter,Value\nFleet Count,50\n";
        assert!(matches!(
            ResultsTable::read_csv(csv.as_bytes()),
            Err(DataError::UnknownParameter(label)) if label == "Fleet Count"
        ));
    }

    #[test]
    fn test_read_rejects_non_numeric_value() {
        let csv = "Parameter,Value\nFleet Size,fifty\n";
        assert!(matches!(
            ResultsTable::read_csv(csv.as_bytes()),
            Err(DataError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);

        let table = default_table();
        table.save(&path).unwrap();

        let file = File::open(&path).unwrap();
        assert_eq!(ResultsTable::read_csv(file).unwrap(), table);
    }
}
