//! Ordinary least squares for a single explanatory variable.

use crate::error::RegressionError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: Decimal,
    pub intercept: Decimal,
    /// Coefficient of determination of the fit.
    pub r_squared: Decimal,
}

impl LinearFit {
    /// Fits a line through `(x, y)` samples by least squares.
    ///
    /// Uses the centered form
    /// `slope = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²`, `intercept = ȳ - slope * x̄`.
    ///
    /// # Errors
    /// Returns an error with fewer than two samples, when every x is the
    /// same, or when an intermediate sum leaves the decimal range.
    pub fn fit(samples: &[(Decimal, Decimal)]) -> Result<Self, RegressionError> {
        if samples.len() < 2 {
            return Err(RegressionError::NotEnoughSamples(samples.len()));
        }

        let n = Decimal::from(samples.len());
        let (sum_x, sum_y) = samples
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(sx, sy), &(x, y)| {
                Some((sx.checked_add(x)?, sy.checked_add(y)?))
            })
            .ok_or(RegressionError::Overflow)?;
        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let (sxx, sxy) = samples
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(sxx, sxy), &(x, y)| {
                let dx = x.checked_sub(mean_x)?;
                let dy = y.checked_sub(mean_y)?;
                Some((
                    sxx.checked_add(dx.checked_mul(dx)?)?,
                    sxy.checked_add(dx.checked_mul(dy)?)?,
                ))
            })
            .ok_or(RegressionError::Overflow)?;

        if sxx.is_zero() {
            return Err(RegressionError::ZeroVariance);
        }

        let slope = sxy.checked_div(sxx).ok_or(RegressionError::Overflow)?;
        let intercept = slope
            .checked_mul(mean_x)
            .and_then(|shift| mean_y.checked_sub(shift))
            .ok_or(RegressionError::Overflow)?;

        let mut fit = Self {
            slope,
            intercept,
            r_squared: Decimal::ONE,
        };
        fit.r_squared = fit.r_squared(samples, mean_y)?;
        Ok(fit)
    }

    /// Evaluates the line at `x`. Values outside the fitted range are
    /// extrapolated, not clamped.
    #[must_use]
    pub fn predict(&self, x: Decimal) -> Decimal {
        self.slope * x + self.intercept
    }

    fn r_squared(
        &self,
        samples: &[(Decimal, Decimal)],
        mean_y: Decimal,
    ) -> Result<Decimal, RegressionError> {
        let (ss_res, ss_tot) = samples
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(res, tot), &(x, y)| {
                let predicted = self.slope.checked_mul(x)?.checked_add(self.intercept)?;
                let residual = y.checked_sub(predicted)?;
                let spread = y.checked_sub(mean_y)?;
                Some((
                    res.checked_add(residual.checked_mul(residual)?)?,
                    tot.checked_add(spread.checked_mul(spread)?)?,
                ))
            })
            .ok_or(RegressionError::Overflow)?;

        // Constant y: the horizontal line explains everything.
        if ss_tot.is_zero() {
            return Ok(Decimal::ONE);
        }

        Ok(Decimal::ONE - ss_res / ss_tot)
    }
}
