//! Zero-division policy for undefined per-class ratios.

use std::fmt;
use std::str::FromStr;

use mlmetrics_core::{MetricsError, Result};

/// What a per-class ratio evaluates to when its denominator is zero.
///
/// One value is chosen per metric call and applies to every class and to
/// every ratio computed for it (precision, recall, and the F1 harmonic mean).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ZeroDivisionPolicy {
    /// The undefined ratio is 0.
    ReturnZero,
    /// The undefined ratio is 1.
    ReturnOne,
    /// The class is dropped from both the weighted sum and the weight total.
    Skip,
}

impl ZeroDivisionPolicy {
    /// All policies, in code order.
    pub const ALL: [ZeroDivisionPolicy; 3] = [Self::ReturnZero, Self::ReturnOne, Self::Skip];

    /// The value an undefined ratio takes, or `None` to skip the class.
    #[inline]
    pub fn fallback(self) -> Option<f64> {
        match self {
            Self::ReturnZero => Some(0.0),
            Self::ReturnOne => Some(1.0),
            Self::Skip => None,
        }
    }

    /// `num / denom`, resolved through the policy when `denom == 0`.
    #[inline]
    pub fn ratio(self, num: usize, denom: usize) -> Option<f64> {
        if denom == 0 {
            self.fallback()
        } else {
            Some(num as f64 / denom as f64)
        }
    }

    /// Integer code: 0 = return zero, 1 = return one, 2 = skip.
    pub fn code(self) -> i32 {
        match self {
            Self::ReturnZero => 0,
            Self::ReturnOne => 1,
            Self::Skip => 2,
        }
    }

    /// Short name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::ReturnZero => "zero",
            Self::ReturnOne => "one",
            Self::Skip => "skip",
        }
    }
}

impl TryFrom<i32> for ZeroDivisionPolicy {
    type Error = MetricsError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::ReturnZero),
            1 => Ok(Self::ReturnOne),
            2 => Ok(Self::Skip),
            other => Err(MetricsError::InvalidPolicy(format!(
                "code {other} (expected 0, 1 or 2)"
            ))),
        }
    }
}

impl FromStr for ZeroDivisionPolicy {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(Self::ReturnZero),
            "one" | "1" => Ok(Self::ReturnOne),
            "skip" | "2" => Ok(Self::Skip),
            other => Err(MetricsError::InvalidPolicy(format!(
                "'{other}' (expected zero, one or skip)"
            ))),
        }
    }
}

impl fmt::Display for ZeroDivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
