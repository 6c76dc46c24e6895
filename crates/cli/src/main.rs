//! Command Line Interface for the fleet digitization ROI calculator.
mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use fleet_roi_data::{DEFAULT_EXPORT_FILE, ResultsTable, load_parameters};
use fleet_roi_domain::entities::{InputParameters, PartialParameters};
use fleet_roi_domain::metrics::{RoiCalculation, compute_with_notes};
use fleet_roi_domain::prediction::RoiPredictor;
use fleet_roi_domain::reference::{cost_breakdown, scenarios};
use rust_decimal::Decimal;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleet-roi")]
#[command(about = "ROI calculator for digitizing fleet operations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show results, cost breakdown, scenarios and the predicted ROI
    Report {
        #[command(flatten)]
        inputs: InputArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also export the results table to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show the computed savings and ROI only
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Predict ROI from the fleet size
    Predict {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Show the typical digitization cost breakdown
    Breakdown,
    /// Compare sample deployment scenarios
    Scenarios,
    /// Export the results table as CSV
    Export {
        #[command(flatten)]
        inputs: InputArgs,

        /// Destination file, or `-` for stdout
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Explain how to use the calculator
    Guide,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Calculator inputs. Unset flags fall back to the parameter file, then
/// to the built-in defaults.
#[derive(Args)]
struct InputArgs {
    /// JSON file with any subset of the parameters
    #[arg(long, env = "FLEET_ROI_PARAMS")]
    params: Option<PathBuf>,

    /// Fleet size, number of vehicles [default: 50]
    #[arg(long, env = "FLEET_ROI_FLEET_SIZE", value_parser = clap::value_parser!(u32).range(1..))]
    fleet_size: Option<u32>,

    /// Fuel volume, liters per month [default: 100000]
    #[arg(long, env = "FLEET_ROI_FUEL_VOLUME", value_parser = non_negative)]
    fuel_volume: Option<Decimal>,

    /// Base salary of staff, USD per month [default: 5000]
    #[arg(long, env = "FLEET_ROI_BASE_SALARY", value_parser = non_negative)]
    base_salary: Option<Decimal>,

    /// Man hours saved per month [default: 160]
    #[arg(long, env = "FLEET_ROI_MAN_HOURS_SAVED", value_parser = non_negative)]
    man_hours_saved: Option<Decimal>,

    /// Digitization cost, USD [default: 20000]
    #[arg(long, env = "FLEET_ROI_DIGITIZATION_COST", value_parser = non_negative)]
    digitization_cost: Option<Decimal>,

    /// Operational savings due to digitization, USD per month [default: 5000]
    #[arg(long, env = "FLEET_ROI_MONTHLY_SAVINGS", value_parser = non_negative)]
    monthly_savings: Option<Decimal>,

    /// Fuel cost per liter, USD [default: 1.5]
    #[arg(long, env = "FLEET_ROI_FUEL_COST_PER_LITER", value_parser = non_negative)]
    fuel_cost_per_liter: Option<Decimal>,

    /// Baseline efficiency, km/l [default: 4.0]
    #[arg(long, env = "FLEET_ROI_BASELINE_EFFICIENCY", value_parser = non_negative)]
    baseline_efficiency: Option<Decimal>,

    /// Improved efficiency, km/l [default: 5.0]
    #[arg(long, env = "FLEET_ROI_IMPROVED_EFFICIENCY", value_parser = non_negative)]
    improved_efficiency: Option<Decimal>,
}

impl InputArgs {
    fn flags(&self) -> PartialParameters {
        PartialParameters {
            fleet_size: self.fleet_size,
            fuel_volume: self.fuel_volume,
            base_salary: self.base_salary,
            man_hours_saved: self.man_hours_saved,
            digitization_cost: self.digitization_cost,
            monthly_savings: self.monthly_savings,
            fuel_cost_per_liter: self.fuel_cost_per_liter,
            baseline_efficiency: self.baseline_efficiency,
            improved_efficiency: self.improved_efficiency,
        }
    }

    /// Layers flags over the parameter file over the defaults.
    fn resolve(&self) -> Result<InputParameters> {
        let file = match &self.params {
            Some(path) => load_parameters(path)
                .with_context(|| format!("failed to load parameters from {}", path.display()))?,
            None => PartialParameters::default(),
        };

        let params = self.flags().or(file).resolve();
        params.validate().context("invalid parameters")?;
        debug!(?params, "Resolved input parameters");
        Ok(params)
    }
}

fn non_negative(s: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(s.trim()).map_err(|e| format!("not a number: {e}"))?;
    if value < Decimal::ZERO {
        return Err(format!("must be at least 0, got {value}"));
    }
    Ok(value)
}

fn calculate(params: &InputParameters) -> RoiCalculation {
    let calc = compute_with_notes(params);
    for note in &calc.notes {
        warn!(?note, "{}", note.describe());
    }
    calc
}

fn export(params: &InputParameters, calc: &RoiCalculation, output: &Path) -> Result<()> {
    let table = ResultsTable::new(params, &calc.result);
    if output == Path::new("-") {
        table.write_csv(io::stdout().lock())?;
    } else {
        table
            .save(output)
            .with_context(|| format!("failed to export results to {}", output.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Report {
            inputs,
            format,
            export: export_path,
        } => {
            let params = inputs.resolve()?;
            let calc = calculate(&params);
            let predicted_roi = RoiPredictor::from_reference_data()?.predict(params.fleet_size);

            match format {
                OutputFormat::Text => {
                    println!("{}\n", report::heading(report::TITLE));
                    println!("{}\n", report::results_section(&params, &calc.result));
                    println!("{}", report::breakdown_table(&cost_breakdown()));
                    println!("{}", report::scenario_table(&scenarios()));
                    println!("{}", report::heading("Predictive ROI Based on Fleet Size"));
                    println!(
                        "{}",
                        report::prediction_line(params.fleet_size, predicted_roi)
                    );
                }
                OutputFormat::Json => {
                    let json = report::JsonReport {
                        parameters: &params,
                        result: &calc.result,
                        notes: &calc.notes,
                        predicted_roi,
                    };
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
            }

            if let Some(path) = export_path {
                export(&params, &calc, path)?;
            }
        }
        Commands::Calculate { inputs, format } => {
            let params = inputs.resolve()?;
            let calc = calculate(&params);

            match format {
                OutputFormat::Text => {
                    println!("{}", report::results_section(&params, &calc.result));
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&calc)?);
                }
            }
        }
        Commands::Predict { inputs } => {
            let params = inputs.resolve()?;
            let predictor = RoiPredictor::from_reference_data()?;
            println!(
                "{}",
                report::prediction_line(params.fleet_size, predictor.predict(params.fleet_size))
            );
        }
        Commands::Breakdown => {
            println!("{}", report::breakdown_table(&cost_breakdown()));
        }
        Commands::Scenarios => {
            println!("{}", report::scenario_table(&scenarios()));
        }
        Commands::Export { inputs, output } => {
            let params = inputs.resolve()?;
            let calc = calculate(&params);
            export(&params, &calc, output)?;
        }
        Commands::Guide => {
            println!("{}", report::GUIDE);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_non_negative_parser() {
        assert_eq!(non_negative("1.5"), Ok(dec!(1.5)));
        assert_eq!(non_negative("0"), Ok(Decimal::ZERO));
        assert!(non_negative("-3").is_err());
        assert!(non_negative("abc").is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "fleet-roi",
            "calculate",
            "--fleet-size",
            "120",
            "--digitization-cost",
            "10000",
        ])
        .unwrap();

        let Commands::Calculate { inputs, .. } = cli.command else {
            panic!("expected calculate");
        };
        let params = inputs.resolve().unwrap();
        assert_eq!(params.fleet_size, 120);
        assert_eq!(params.digitization_cost, dec!(10000));
        assert_eq!(params.base_salary, dec!(5000));
    }

    #[test]
    fn test_fleet_size_below_one_rejected() {
        let parsed = Cli::try_parse_from(["fleet-roi", "predict", "--fleet-size", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_negative_flag_rejected() {
        let parsed = Cli::try_parse_from(["fleet-roi", "calculate", "--fuel-volume=-10"]);
        assert!(parsed.is_err());
    }
}
