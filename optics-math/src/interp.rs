//! Linear interpolation on sampled 1D profiles.
//!
//! Queries outside the sampled range hold the end values, which is what
//! profile lookups on a closed angular domain want.

use thiserror::Error;

/// Errors that can occur during interpolation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpError {
    #[error("Input vectors must have at least 2 points")]
    InsufficientData,
    #[error("Input vectors must have the same length")]
    MismatchedLengths,
    #[error("X values must be sorted in ascending order")]
    UnsortedData,
}

fn validate(xs: &[f64], ys: &[f64]) -> Result<(), InterpError> {
    if xs.len() != ys.len() {
        return Err(InterpError::MismatchedLengths);
    }

    if xs.len() < 2 {
        return Err(InterpError::InsufficientData);
    }

    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(InterpError::UnsortedData);
    }

    Ok(())
}

/// Linear interpolation between the two samples bracketing `x`.
///
/// Caller guarantees `xs[0] <= x <= xs[n-1]` and validated inputs.
fn interp_inside(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    // partition_point gives the first sample strictly greater than x
    let idx = xs.partition_point(|&probe| probe <= x);
    if idx == 0 {
        return ys[0];
    }
    if idx == xs.len() {
        return ys[xs.len() - 1];
    }

    let i1 = idx - 1;
    let i2 = idx;

    let t = (x - xs[i1]) / (xs[i2] - xs[i1]);
    ys[i1] + t * (ys[i2] - ys[i1])
}

/// Interpolates every value of `queries`, holding the first/last sample value
/// for queries below/above the sampled range.
///
/// NaN queries produce NaN outputs.
///
/// # Errors
///
/// * `InterpError::InsufficientData` - Less than 2 samples
/// * `InterpError::MismatchedLengths` - `xs` and `ys` have different lengths
/// * `InterpError::UnsortedData` - `xs` is not strictly ascending
pub fn interp_clamped(queries: &[f64], xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, InterpError> {
    validate(xs, ys)?;

    let min_x = xs[0];
    let max_x = xs[xs.len() - 1];

    Ok(queries
        .iter()
        .map(|&x| {
            if x.is_nan() {
                f64::NAN
            } else if x <= min_x {
                ys[0]
            } else if x >= max_x {
                ys[ys.len() - 1]
            } else {
                interp_inside(x, xs, ys)
            }
        })
        .collect())
}
