use crate::math::rounding::round_to;

/// Decimal digits the summed squared error is rounded to.
pub const SQUARED_ERROR_DIGITS: usize = 16;

pub struct SquaredError;

impl SquaredError {
    /// Per-sample error: expected - predicted
    pub fn errors(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| e - p)
            .collect()
    }

    /// Σ error², rounded to 16 decimals
    pub fn total(errors: &[f64]) -> f64 {
        let sum = errors.iter().map(|e| e * e).sum::<f64>();
        round_to(sum, SQUARED_ERROR_DIGITS)
    }
}
