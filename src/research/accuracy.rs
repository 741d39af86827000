use crate::{Error, Label, Result};


/// Number of decimal digits kept by [`truncate`].
const DIGITS: i32 = 2;

/// Absorbs the representation error of values such as `0.29`,
/// whose product with `100` falls just below the integer.
const GUARD: f64 = 1e-9;


/// Returns the fraction of `predictions` that equal `truth`
/// position by position, truncated to two decimal digits.
///
/// Returns `Error::NoData` if there is nothing to compare and
/// `Error::ShapeMismatch` if the lengths differ.
pub fn accuracy(predictions: &[Label], truth: &[Label]) -> Result<f64> {
    if predictions.len() != truth.len() {
        return Err(Error::ShapeMismatch {
            expected: truth.len(),
            got: predictions.len(),
        });
    }
    if truth.is_empty() {
        return Err(Error::NoData(
            "cannot compute the accuracy of an empty sample".to_string()
        ));
    }

    let n_sample = truth.len();
    let correct = predictions.iter()
        .zip(truth)
        .filter(|(p, y)| p == y)
        .count();

    // Integer division floors the percentage exactly.
    let percent = correct * 100 / n_sample;
    Ok(percent as f64 / 100.0)
}


/// Truncates `x` toward zero, keeping two decimal digits.
#[inline]
pub fn truncate(x: f64) -> f64 {
    let scale = 10_f64.powi(DIGITS);
    let shifted = x * scale;
    let shifted = if shifted >= 0.0 {
        (shifted + GUARD).trunc()
    } else {
        (shifted - GUARD).trunc()
    };
    shifted / scale
}


/// Formats an accuracy with exactly two decimal digits.
#[inline]
pub fn format_accuracy(x: f64) -> String {
    format!("{x:.2}")
}
