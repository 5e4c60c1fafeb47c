//! Evaluation metrics for supervised-learning predictions.
//!
//! - **Classification**: accuracy, Hamming loss, and support-weighted
//!   precision / recall / F1 under an explicit [`ZeroDivisionPolicy`]
//! - **Regression**: MSE, MAE, R², and MAPE
//! - **Building blocks**: per-class confusion tallies ([`ConfusionCounts`]),
//!   the truth-derived [`ClassSet`], and the [`WeightedAverage`] accumulator
//!
//! Every entry point checks that `y_true` and `y_pred` have the same length
//! and fails with [`MetricsError::DimensionMismatch`] otherwise. Arithmetic
//! edge cases (empty input, zero denominators, constant ground truth) resolve
//! to a defined number, never `NaN`.
//!
//! ```
//! use mlmetrics_eval::{classification, ZeroDivisionPolicy};
//!
//! let y_true = [1, 1, 2, 2, 3];
//! let y_pred = [1, 2, 2, 2, 3];
//! let p = classification::precision(&y_true, &y_pred, ZeroDivisionPolicy::ReturnZero).unwrap();
//! assert!((p - 13.0 / 15.0).abs() < 1e-12);
//! ```

pub mod aggregate;
pub mod classes;
pub mod classification;
pub mod confusion;
pub mod policy;
pub mod regression;

pub use aggregate::{weighted_average, WeightedAverage};
pub use classes::ClassSet;
pub use classification::{ClassScore, ClassificationReport};
pub use confusion::ConfusionCounts;
pub use mlmetrics_core::{MetricsError, Result};
pub use policy::ZeroDivisionPolicy;
pub use regression::RegressionReport;
