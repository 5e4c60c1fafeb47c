//! Core trait definitions for mlmetrics.
//!
//! These traits define what a value must support to be scored: class labels
//! only need equality and hashing, regression values only need widening to
//! `f64`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{MetricsError, Result};

/// A class label: any value with equality and hashing.
///
/// No ordering is assumed. Implemented for every `Eq + Hash` type.
pub trait Label: Eq + Hash {}

impl<T: Eq + Hash + ?Sized> Label for T {}

/// A real-valued regression target or prediction.
///
/// Values are widened to `f64` before any arithmetic, so integer inputs
/// never overflow on subtraction.
pub trait Numeric: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A float-coded class label with bitwise equality and hashing.
///
/// `-0.0` is folded into `0.0`; NaN is rejected at construction.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct FloatLabel(f64);

impl FloatLabel {
    /// Wrap `value` as a label.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidInput`] if `value` is NaN.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(MetricsError::InvalidInput("NaN is not a class label".into()));
        }
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// The wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatLabel {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatLabel {}

impl Hash for FloatLabel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for FloatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for FloatLabel {
    type Error = MetricsError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numeric_widens() {
        assert_eq!(3u8.to_f64(), 3.0);
        assert_eq!((-7i64).to_f64(), -7.0);
        assert_eq!(1.5f32.to_f64(), 1.5);
    }

    #[test]
    fn float_label_signed_zero() {
        let a = FloatLabel::new(0.0).unwrap();
        let b = FloatLabel::new(-0.0).unwrap();
        assert_eq!(a, b);
        let set: HashSet<FloatLabel> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn float_label_distinct_values() {
        let a = FloatLabel::new(1.0).unwrap();
        let b = FloatLabel::new(2.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.value(), 1.0);
        assert_eq!(b.to_string(), "2");
    }

    #[test]
    fn float_label_rejects_nan() {
        assert!(FloatLabel::new(f64::NAN).is_err());
        assert!(FloatLabel::try_from(f64::NAN).is_err());
    }

    #[test]
    fn label_blanket_impl() {
        fn takes_label<T: Label + ?Sized>(_: &T) {}
        takes_label(&1u32);
        takes_label("cat");
        takes_label(&String::from("dog"));
        takes_label(&FloatLabel::new(3.0).unwrap());
    }
}
