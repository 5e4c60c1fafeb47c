//! Confusion tallies for multiclass classification.
//!
//! [`ConfusionCounts`] scans a `(truth, prediction)` sequence pair once per
//! class, so scoring K classes costs O(N·K) time and O(1) extra memory.

use mlmetrics_core::error::check_same_len;
use mlmetrics_core::{Label, Result};

// ---------------------------------------------------------------------------
// Per-class counts
// ---------------------------------------------------------------------------

/// True-positive / false-positive / false-negative counts for one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionCounts {
    /// `y_true[i] == c && y_pred[i] == c`
    pub tp: usize,
    /// `y_pred[i] == c && y_true[i] != c`
    pub fp: usize,
    /// `y_true[i] == c && y_pred[i] != c`
    #[cfg_attr(feature = "serde", serde(rename = "fn"))]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Tally `class` over the sequence pair.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::DimensionMismatch`](mlmetrics_core::MetricsError)
    /// if the slices have different lengths.
    pub fn tally<T: Label>(y_true: &[T], y_pred: &[T], class: &T) -> Result<Self> {
        check_same_len(y_true, y_pred)?;
        Ok(Self::scan(y_true, y_pred, class))
    }

    /// Tally without the length check; the caller has already validated it.
    pub(crate) fn scan<T: Label>(y_true: &[T], y_pred: &[T], class: &T) -> Self {
        let mut counts = Self::default();
        for (t, p) in y_true.iter().zip(y_pred) {
            match (t == class, p == class) {
                (true, true) => counts.tp += 1,
                (true, false) => counts.fn_ += 1,
                (false, true) => counts.fp += 1,
                (false, false) => {}
            }
        }
        counts
    }

    /// Positive predictions for the class: `tp + fp`.
    pub fn predicted(&self) -> usize {
        self.tp + self.fp
    }

    /// Ground-truth occurrences of the class: `tp + fn`.
    pub fn actual(&self) -> usize {
        self.tp + self.fn_
    }
}

/// `(tp, fp)` for `class`, the counters precision needs.
pub(crate) fn precision_scan<T: Label>(y_true: &[T], y_pred: &[T], class: &T) -> (usize, usize) {
    let mut tp = 0;
    let mut fp = 0;
    for (t, p) in y_true.iter().zip(y_pred) {
        if p == class {
            if t == class {
                tp += 1;
            } else {
                fp += 1;
            }
        }
    }
    (tp, fp)
}

/// `(tp, fn)` for `class`, the counters recall needs.
pub(crate) fn recall_scan<T: Label>(y_true: &[T], y_pred: &[T], class: &T) -> (usize, usize) {
    let mut tp = 0;
    let mut fn_ = 0;
    for (t, p) in y_true.iter().zip(y_pred) {
        if t == class {
            if p == class {
                tp += 1;
            } else {
                fn_ += 1;
            }
        }
    }
    (tp, fn_)
}

/// True and false positives of `class`.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn precision_tally<T: Label>(y_true: &[T], y_pred: &[T], class: &T) -> Result<(usize, usize)> {
    check_same_len(y_true, y_pred)?;
    Ok(precision_scan(y_true, y_pred, class))
}

/// True positives and false negatives of `class`.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn recall_tally<T: Label>(y_true: &[T], y_pred: &[T], class: &T) -> Result<(usize, usize)> {
    check_same_len(y_true, y_pred)?;
    Ok(recall_scan(y_true, y_pred, class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlmetrics_core::MetricsError;

    // ── Per-class counts ────────────────────────────────────────

    #[test]
    fn counts_binary_basic() {
        // Class 1: TP=2, FP=1, FN=1
        let actual = [1, 1, 0, 0, 1, 0];
        let predicted = [1, 0, 0, 1, 1, 0];
        let c = ConfusionCounts::tally(&actual, &predicted, &1).unwrap();
        assert_eq!(c, ConfusionCounts { tp: 2, fp: 1, fn_: 1 });
        assert_eq!(c.predicted(), 3);
        assert_eq!(c.actual(), 3);
    }

    #[test]
    fn reduced_scans_match_joint() {
        let actual = ["a", "b", "c", "a", "b", "a"];
        let predicted = ["a", "c", "c", "b", "b", "d"];
        for class in ["a", "b", "c", "d"] {
            let joint = ConfusionCounts::tally(&actual, &predicted, &class).unwrap();
            let (tp, fp) = precision_tally(&actual, &predicted, &class).unwrap();
            let (tp2, fn_) = recall_tally(&actual, &predicted, &class).unwrap();
            assert_eq!((tp, fp), (joint.tp, joint.fp));
            assert_eq!((tp2, fn_), (joint.tp, joint.fn_));
        }
    }

    #[test]
    fn prediction_only_class_is_all_false_positive() {
        let actual = [1, 2];
        let predicted = [9, 9];
        let c = ConfusionCounts::tally(&actual, &predicted, &9).unwrap();
        assert_eq!(c, ConfusionCounts { tp: 0, fp: 2, fn_: 0 });
    }

    #[test]
    fn counts_length_mismatch() {
        let err = ConfusionCounts::tally(&[1, 2], &[1], &1).unwrap_err();
        assert!(matches!(err, MetricsError::DimensionMismatch { .. }));
        assert!(precision_tally(&[1], &[1, 2], &1).is_err());
        assert!(recall_tally(&[1], &[1, 2], &1).is_err());
    }
}
