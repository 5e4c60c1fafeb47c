//! Multiclass classification metrics.
//!
//! Precision, recall, and F1 are support-weighted averages over the classes
//! of `y_true`: each class's score counts in proportion to how often it
//! occurs in the ground truth. Labels that only appear in `y_pred` are never
//! averaged; a sample predicted as one is a false negative of its true class.
//!
//! Empty input scores 0 for every metric in this module.

use mlmetrics_core::error::check_same_len;
use mlmetrics_core::{Label, Result};

use crate::aggregate::WeightedAverage;
use crate::classes::ClassSet;
use crate::confusion::{precision_scan, recall_scan, ConfusionCounts};
use crate::policy::ZeroDivisionPolicy;

// ---------------------------------------------------------------------------
// Scalar metrics
// ---------------------------------------------------------------------------

/// Fraction of positions where the prediction equals the truth.
///
/// # Errors
///
/// Returns [`MetricsError::DimensionMismatch`](mlmetrics_core::MetricsError) if the
/// slices have different lengths.
pub fn accuracy<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    if y_true.is_empty() {
        return Ok(0.0);
    }
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Fraction of positions where the prediction differs from the truth.
///
/// For single-label input this is `1 - accuracy` whenever the input is
/// non-empty.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn hamming_loss<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    if y_true.is_empty() {
        return Ok(0.0);
    }
    let mismatches = y_true.iter().zip(y_pred).filter(|(t, p)| t != p).count();
    Ok(mismatches as f64 / y_true.len() as f64)
}

/// Support-weighted precision: `tp / (tp + fp)` per class.
///
/// A class never predicted has an undefined precision, resolved by `policy`.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn precision<T: Label>(y_true: &[T], y_pred: &[T], policy: ZeroDivisionPolicy) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    let classes = ClassSet::from_truth(y_true);
    let avg: WeightedAverage = classes
        .iter()
        .filter_map(|(class, support)| {
            let (tp, fp) = precision_scan(y_true, y_pred, class);
            policy.ratio(tp, tp + fp).map(|p| (p, support))
        })
        .collect();
    Ok(avg.value())
}

/// Support-weighted recall: `tp / (tp + fn)` per class.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn recall<T: Label>(y_true: &[T], y_pred: &[T], policy: ZeroDivisionPolicy) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    let classes = ClassSet::from_truth(y_true);
    let avg: WeightedAverage = classes
        .iter()
        .filter_map(|(class, support)| {
            let (tp, fn_) = recall_scan(y_true, y_pred, class);
            policy.ratio(tp, tp + fn_).map(|r| (r, support))
        })
        .collect();
    Ok(avg.value())
}

/// Support-weighted F1, the harmonic mean of per-class precision and recall.
///
/// Precision and recall are each resolved through `policy` on their own zero
/// denominator. When both resolve to 0 the harmonic mean is itself undefined
/// and goes through `policy` once more. Under [`ZeroDivisionPolicy::Skip`] a
/// class is dropped as soon as any of the three is undefined.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn f1<T: Label>(y_true: &[T], y_pred: &[T], policy: ZeroDivisionPolicy) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    let classes = ClassSet::from_truth(y_true);
    let avg: WeightedAverage = classes
        .iter()
        .filter_map(|(class, support)| {
            let counts = ConfusionCounts::scan(y_true, y_pred, class);
            class_f1(&counts, policy).map(|f| (f, support))
        })
        .collect();
    Ok(avg.value())
}

fn class_f1(counts: &ConfusionCounts, policy: ZeroDivisionPolicy) -> Option<f64> {
    let p = policy.ratio(counts.tp, counts.predicted())?;
    let r = policy.ratio(counts.tp, counts.actual())?;
    f1_from(p, r, policy)
}

fn f1_from(p: f64, r: f64, policy: ZeroDivisionPolicy) -> Option<f64> {
    let sum = p + r;
    if sum == 0.0 {
        return policy.fallback();
    }
    Some(2.0 * p * r / sum)
}

// ---------------------------------------------------------------------------
// Per-class breakdown
// ---------------------------------------------------------------------------

/// Scores for one ground-truth class.
///
/// A ratio left undefined under [`ZeroDivisionPolicy::Skip`] is `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassScore<'a, T> {
    pub label: &'a T,
    pub support: usize,
    pub counts: ConfusionCounts,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

/// Per-class precision, recall, F1 and support, in first-appearance order of
/// the ground-truth classes.
///
/// The weighted averages of these rows (skipping `None`) are exactly
/// [`precision`], [`recall`], and [`f1`].
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn class_scores<'a, T: Label>(
    y_true: &'a [T],
    y_pred: &[T],
    policy: ZeroDivisionPolicy,
) -> Result<Vec<ClassScore<'a, T>>> {
    check_same_len(y_true, y_pred)?;
    let classes = ClassSet::from_truth(y_true);
    let rows = classes
        .iter()
        .map(|(label, support)| {
            let counts = ConfusionCounts::scan(y_true, y_pred, label);
            let precision = policy.ratio(counts.tp, counts.predicted());
            let recall = policy.ratio(counts.tp, counts.actual());
            let f1 = match (precision, recall) {
                (Some(p), Some(r)) => f1_from(p, r, policy),
                _ => None,
            };
            ClassScore {
                label,
                support,
                counts,
                precision,
                recall,
                f1,
            }
        })
        .collect();
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Every classification metric for one sequence pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationReport {
    pub samples: usize,
    pub policy: ZeroDivisionPolicy,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub hamming_loss: f64,
}

impl ClassificationReport {
    /// Compute all metrics under `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths.
    pub fn compute<T: Label>(y_true: &[T], y_pred: &[T], policy: ZeroDivisionPolicy) -> Result<Self> {
        check_same_len(y_true, y_pred)?;
        Ok(Self {
            samples: y_true.len(),
            policy,
            accuracy: accuracy(y_true, y_pred)?,
            precision: precision(y_true, y_pred, policy)?,
            recall: recall(y_true, y_pred, policy)?,
            f1: f1(y_true, y_pred, policy)?,
            hamming_loss: hamming_loss(y_true, y_pred)?,
        })
    }
}
