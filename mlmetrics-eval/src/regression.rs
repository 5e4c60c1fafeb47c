//! Regression metrics.
//!
//! All four metrics widen every element to `f64` before subtracting and
//! return 0 for empty input.

use mlmetrics_core::error::check_same_len;
use mlmetrics_core::{Numeric, Result};

/// Mean Squared Error: `mean((true - pred)²)`.
///
/// # Errors
///
/// Returns [`MetricsError::DimensionMismatch`](mlmetrics_core::MetricsError) if the
/// slices have different lengths.
pub fn mse<T: Numeric>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    Ok(mean(residuals(y_true, y_pred).map(|d| d * d), y_true.len()))
}

/// Mean Absolute Error: `mean(|true - pred|)`.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn mae<T: Numeric>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    Ok(mean(residuals(y_true, y_pred).map(f64::abs), y_true.len()))
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// Unbounded below. Constant (or empty) ground truth has `SS_tot == 0`, for
/// which the score is defined as 0.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn r2<T: Numeric>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    let n = y_true.len();
    if n == 0 {
        return Ok(0.0);
    }

    let mean_true = y_true.iter().map(|v| v.to_f64()).sum::<f64>() / n as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (t, p) in y_true.iter().zip(y_pred) {
        let t = t.to_f64();
        let res = t - p.to_f64();
        let dev = t - mean_true;
        ss_res += res * res;
        ss_tot += dev * dev;
    }

    if ss_tot == 0.0 {
        return Ok(0.0);
    }
    Ok(1.0 - ss_res / ss_tot)
}

/// Mean Absolute Percentage Error, in percent.
///
/// `mean(|(true - pred) / true|) * 100` over the samples with `true != 0`.
/// Samples with a zero target are left out of both the sum and the count;
/// if none remain the result is 0.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn mape<T: Numeric>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_same_len(y_true, y_pred)?;

    let (sum, count) = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t.to_f64(), p.to_f64()))
        .filter(|&(t, _)| t != 0.0)
        .fold((0.0f64, 0usize), |(sum, count), (t, p)| {
            (sum + ((t - p) / t).abs(), count + 1)
        });

    if count == 0 {
        return Ok(0.0);
    }
    Ok(sum / count as f64 * 100.0)
}

#[inline]
fn residuals<'s, T: Numeric>(y_true: &'s [T], y_pred: &'s [T]) -> impl Iterator<Item = f64> + 's {
    y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| t.to_f64() - p.to_f64())
}

#[inline]
fn mean(values: impl Iterator<Item = f64>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

/// Every regression metric for one sequence pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionReport {
    pub samples: usize,
    pub mse: f64,
    pub mae: f64,
    pub r2: f64,
    /// Percent, not a fraction.
    pub mape: f64,
}

impl RegressionReport {
    /// Compute all metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths.
    pub fn compute<T: Numeric>(y_true: &[T], y_pred: &[T]) -> Result<Self> {
        check_same_len(y_true, y_pred)?;
        Ok(Self {
            samples: y_true.len(),
            mse: mse(y_true, y_pred)?,
            mae: mae(y_true, y_pred)?,
            r2: r2(y_true, y_pred)?,
            mape: mape(y_true, y_pred)?,
        })
    }

    /// Root of the mean squared error.
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }
}
