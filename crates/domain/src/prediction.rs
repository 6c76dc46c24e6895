//! ROI prediction from fleet size.
//!
//! The predictor is a straight line fitted on a small reference set of
//! fleets with known ROI. It is illustrative: the reference set is fixed
//! and nothing is learned from the caller's data.

use crate::error::RegressionError;
use crate::math::regression::LinearFit;
use rust_decimal::Decimal;

/// Reference fleet sizes paired with their observed ROI in percent.
pub const REFERENCE_SAMPLES: [(u32, u32); 4] = [(50, 10), (100, 20), (150, 30), (200, 40)];

/// Predicts ROI in percent for a given fleet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiPredictor {
    fit: LinearFit,
}

impl RoiPredictor {
    /// Fits the predictor on [`REFERENCE_SAMPLES`].
    ///
    /// # Errors
    /// Propagates the regression error; the reference set itself always
    /// fits.
    pub fn from_reference_data() -> Result<Self, RegressionError> {
        let samples: Vec<(Decimal, Decimal)> = REFERENCE_SAMPLES
            .iter()
            .map(|&(fleet, roi)| (Decimal::from(fleet), Decimal::from(roi)))
            .collect();

        Ok(Self {
            fit: LinearFit::fit(&samples)?,
        })
    }

    /// Predicted ROI in percent. Fleet sizes outside the reference range
    /// are extrapolated.
    #[must_use]
    pub fn predict(&self, fleet_size: u32) -> Decimal {
        self.fit.predict(Decimal::from(fleet_size))
    }

    #[must_use]
    pub fn fit(&self) -> &LinearFit {
        &self.fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn predictor() -> RoiPredictor {
        RoiPredictor::from_reference_data().unwrap()
    }

    #[test]
    fn test_reference_line() {
        let fit = *predictor().fit();
        assert_eq!(fit.slope, dec!(0.2));
        assert_eq!(fit.intercept, Decimal::ZERO);
        assert_eq!(fit.r_squared, Decimal::ONE);
    }

    #[test]
    fn test_predict_on_training_point() {
        assert_eq!(predictor().predict(100), dec!(20));
    }

    #[test]
    fn test_predict_interpolates() {
        assert_eq!(predictor().predict(75), dec!(15));
    }

    #[test]
    fn test_predict_extrapolates_without_clamping() {
        let predictor = predictor();
        assert_eq!(predictor.predict(300), dec!(60));
        assert_eq!(predictor.predict(1), dec!(0.2));
    }
}
