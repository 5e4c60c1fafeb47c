//! Structured error types for mlmetrics.

use thiserror::Error;

/// Unified error type for all mlmetrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Truth and prediction sequences differ in length.
    #[error("dimension mismatch: y_true has {y_true} samples, y_pred has {y_pred}")]
    DimensionMismatch { y_true: usize, y_pred: usize },

    /// Zero-division policy value outside the known set.
    #[error("invalid zero-division policy: {0}")]
    InvalidPolicy(String),

    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout mlmetrics.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Fail with [`MetricsError::DimensionMismatch`] unless both slices have the same length.
pub fn check_same_len<A, B>(y_true: &[A], y_pred: &[B]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::DimensionMismatch {
            y_true: y_true.len(),
            y_pred: y_pred.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_len_ok() {
        assert!(check_same_len(&[1, 2], &[3, 4]).is_ok());
        let empty: [u8; 0] = [];
        assert!(check_same_len(&empty, &empty).is_ok());
    }

    #[test]
    fn mismatch_reports_both_lengths() {
        let err = check_same_len(&[1, 2], &[1]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::DimensionMismatch { y_true: 2, y_pred: 1 }
        ));
        assert_eq!(
            err.to_string(),
            "dimension mismatch: y_true has 2 samples, y_pred has 1"
        );
    }

    #[test]
    fn io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MetricsError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
