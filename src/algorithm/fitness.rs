//! Scalar reconstruction error between a rendered mosaic and the target

use crate::io::error::{EvolutionError, Result};
use ndarray::Array3;

/// Mean squared per-channel pixel difference
///
/// Computes `sum((target - rendered)^2) / (H*W*C)` in `f64`. Lower is strictly
/// better; `0.0` means a pixel-exact reconstruction. Pure and side-effect
/// free; callers cache the value on the individual.
///
/// # Errors
///
/// Returns a dimension mismatch error when the two arrays disagree in shape
pub fn mean_squared_error(rendered: &Array3<u8>, target: &Array3<u8>) -> Result<f64> {
    if rendered.dim() != target.dim() {
        return Err(EvolutionError::DimensionMismatch {
            expected: target.dim(),
            actual: rendered.dim(),
        });
    }

    let (height, width, channels) = target.dim();
    let sum = rendered
        .iter()
        .zip(target.iter())
        .fold(0.0_f64, |acc, (&r, &t)| {
            let diff = f64::from(t) - f64::from(r);
            diff.mul_add(diff, acc)
        });

    Ok(sum / (height * width * channels) as f64)
}
