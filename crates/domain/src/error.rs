//! Error types for the domain crate.

use rust_decimal::Decimal;

/// Violations of the input bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// A fleet needs at least one vehicle.
    #[error("fleet size must be at least 1, got {0}")]
    FleetSizeTooSmall(u32),

    /// A monetary or volume field was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },
}

/// Failures of the least-squares fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegressionError {
    #[error("at least two samples are required, got {0}")]
    NotEnoughSamples(usize),

    #[error("all x values are identical, slope is undefined")]
    ZeroVariance,

    #[error("arithmetic overflow while fitting")]
    Overflow,
}
