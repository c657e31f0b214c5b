//! [`ValueError`]: a central value with a statistical and a systematic
//! uncertainty, both stored squared.

use crate::error::{Error, Result};
use crate::real::Real;
use std::iter::Sum;

/// A value with statistical and systematic uncertainty.
///
/// Errors are given and returned as standard deviations but stored as
/// variances, so independent contributions combine by plain addition and the
/// stored fields are never negative.
///
/// Equality compares the three stored fields exactly, without tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueError<T> {
    value: T,
    stat_error2: T,
    syst_error2: T,
}

/// Double-precision [`ValueError`].
pub type ValueErrorF64 = ValueError<f64>;

impl<T: Real> ValueError<T> {
    /// Create a value from its central value and its statistical and
    /// systematic errors (standard deviations, not variances).
    #[inline]
    pub fn new(value: T, stat_error: T, syst_error: T) -> Self {
        Self { value, stat_error2: stat_error * stat_error, syst_error2: syst_error * syst_error }
    }

    /// Create a value with a statistical error only.
    #[inline]
    pub fn with_stat(value: T, stat_error: T) -> Self {
        Self::new(value, stat_error, T::zero())
    }

    /// Create an exact value (both errors zero).
    #[inline]
    pub fn exact(value: T) -> Self {
        Self { value, stat_error2: T::zero(), syst_error2: T::zero() }
    }

    /// Like [`new`](Self::new), but rejects NaN and infinite inputs.
    pub fn try_new(value: T, stat_error: T, syst_error: T) -> Result<Self> {
        for (field, x) in [("value", value), ("stat_error", stat_error), ("syst_error", syst_error)]
        {
            if !x.is_finite() {
                return Err(Error::NonFinite { field, value: x.to_f64() });
            }
        }
        Ok(Self::new(value, stat_error, syst_error))
    }

    /// Build directly from variances. Callers guarantee both are `>= 0`.
    #[inline]
    pub(crate) fn from_variances(value: T, stat_error2: T, syst_error2: T) -> Self {
        Self { value, stat_error2, syst_error2 }
    }

    /// Convert to another representation, copying the stored fields as-is.
    pub fn cast<U: Real>(self) -> ValueError<U> {
        ValueError {
            value: U::from_f64(self.value.to_f64()),
            stat_error2: U::from_f64(self.stat_error2.to_f64()),
            syst_error2: U::from_f64(self.syst_error2.to_f64()),
        }
    }

    // --- Value ---

    /// Central value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Replace the central value, keeping both errors.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Squared central value.
    #[inline]
    pub fn value2(&self) -> T {
        self.value * self.value
    }

    // --- Statistical error ---

    /// Statistical error (standard deviation).
    #[inline]
    pub fn stat_error(&self) -> T {
        self.stat_error2.sqrt()
    }

    /// Set the statistical error from a standard deviation.
    #[inline]
    pub fn set_stat_error(&mut self, stat_error: T) {
        self.stat_error2 = stat_error * stat_error;
    }

    /// Statistical variance.
    #[inline]
    pub fn stat_error2(&self) -> T {
        self.stat_error2
    }

    /// Relative statistical variance, `stat_error2 / value2`.
    ///
    /// Exactly zero when the statistical variance is zero, even if the
    /// central value is zero too.
    #[inline]
    pub fn stat_error_rel2(&self) -> T {
        relative(self.stat_error2, self.value2())
    }

    /// Relative statistical error.
    #[inline]
    pub fn stat_error_rel(&self) -> T {
        self.stat_error_rel2().sqrt()
    }

    // --- Systematic error ---

    /// Systematic error (standard deviation).
    #[inline]
    pub fn syst_error(&self) -> T {
        self.syst_error2.sqrt()
    }

    /// Set the systematic error from a standard deviation.
    #[inline]
    pub fn set_syst_error(&mut self, syst_error: T) {
        self.syst_error2 = syst_error * syst_error;
    }

    /// Systematic variance.
    #[inline]
    pub fn syst_error2(&self) -> T {
        self.syst_error2
    }

    /// Relative systematic variance, `syst_error2 / value2`, with the same
    /// zero guard as [`stat_error_rel2`](Self::stat_error_rel2).
    #[inline]
    pub fn syst_error_rel2(&self) -> T {
        relative(self.syst_error2, self.value2())
    }

    /// Relative systematic error.
    #[inline]
    pub fn syst_error_rel(&self) -> T {
        self.syst_error_rel2().sqrt()
    }

    /// Whether the value and both variances are finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.stat_error2.is_finite() && self.syst_error2.is_finite()
    }
}

#[inline]
fn relative<T: Real>(error2: T, value2: T) -> T {
    if error2 == T::zero() { T::zero() } else { error2 / value2 }
}

// --- From ---

impl<T: Real> From<T> for ValueError<T> {
    fn from(value: T) -> Self {
        Self::exact(value)
    }
}

impl From<ValueError<f32>> for ValueError<f64> {
    fn from(z: ValueError<f32>) -> Self {
        z.cast()
    }
}

// --- Sum ---

impl<T: Real> Sum for ValueError<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::exact(T::zero()), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction_stores_squares() {
        let a = ValueError::new(2.0, 0.1, 0.3);
        assert_eq!(a.value(), 2.0);
        assert_relative_eq!(a.stat_error2(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(a.syst_error2(), 0.09, epsilon = 1e-15);
        assert_relative_eq!(a.stat_error(), 0.1, epsilon = 1e-15);
        assert_relative_eq!(a.syst_error(), 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_value_and_error() {
        let a = ValueError::with_stat(-2.0, -1.0);
        assert_eq!(a.value(), -2.0);
        assert_eq!(a.stat_error(), 1.0);
        assert_eq!(a.syst_error(), 0.0);
        assert_eq!(a.value2(), 4.0);
    }

    #[test]
    fn test_default_and_exact_have_no_error() {
        let d = ValueErrorF64::default();
        assert_eq!(d, ValueError::new(0.0, 0.0, 0.0));

        let e: ValueErrorF64 = 4.5.into();
        assert_eq!(e.value(), 4.5);
        assert_eq!(e.stat_error2(), 0.0);
        assert_eq!(e.syst_error2(), 0.0);
        assert_eq!(e, ValueError::exact(4.5));
    }

    #[test]
    fn test_assigning_scalar_resets_errors() {
        let mut a = ValueError::new(1.0, 0.5, 0.5);
        assert!(a.stat_error2() > 0.0);
        a = 7.0.into();
        assert_eq!(a, ValueError::exact(7.0));
    }

    #[test]
    fn test_setters_square_their_input() {
        let mut a = ValueError::exact(3.0);
        a.set_stat_error(0.2);
        a.set_syst_error(-0.4);
        a.set_value(-1.0);
        assert_eq!(a.value(), -1.0);
        assert_relative_eq!(a.stat_error2(), 0.04, epsilon = 1e-15);
        assert_relative_eq!(a.syst_error2(), 0.16, epsilon = 1e-15);
        assert_relative_eq!(a.syst_error(), 0.4, epsilon = 1e-15);
    }

    #[test]
    fn test_relative_errors() {
        let a = ValueError::new(4.0, 0.4, 2.0);
        assert_relative_eq!(a.stat_error_rel2(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(a.stat_error_rel(), 0.1, epsilon = 1e-15);
        assert_relative_eq!(a.syst_error_rel2(), 0.25, epsilon = 1e-15);
        assert_relative_eq!(a.syst_error_rel(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_relative_error_zero_guard() {
        let zero = ValueError::exact(0.0);
        assert_eq!(zero.stat_error_rel2(), 0.0);
        assert_eq!(zero.syst_error_rel2(), 0.0);
        assert_eq!(zero.stat_error_rel(), 0.0);

        // No guard when the error is non-zero: plain IEEE division.
        let blown = ValueError::with_stat(0.0_f64, 1.0);
        assert!(blown.stat_error_rel2().is_infinite());
    }

    #[test]
    fn test_cast_copies_stored_fields() {
        let a = ValueError::new(1.5_f32, 0.25, 0.5);
        let b: ValueErrorF64 = a.into();
        assert_eq!(b.value(), 1.5);
        assert_eq!(b.stat_error2(), 0.0625);
        assert_eq!(b.syst_error2(), 0.25);

        let back: ValueError<f32> = b.cast();
        assert_eq!(back, a);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(ValueError::try_new(1.0, 0.1, 0.0).is_ok());
        assert!(matches!(
            ValueError::try_new(f64::NAN, 0.1, 0.0),
            Err(Error::NonFinite { field: "value", .. })
        ));
    }

    #[test]
    fn test_try_new_reports_field() {
        match ValueError::try_new(1.0, 0.1, f64::INFINITY) {
            Err(Error::NonFinite { field, value }) => {
                assert_eq!(field, "syst_error");
                assert!(value.is_infinite());
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn test_is_finite() {
        assert!(ValueError::new(1.0, 2.0, 3.0).is_finite());
        assert!(!ValueError::new(1.0, f64::MAX, 0.0).is_finite());
    }

    #[test]
    fn test_sum_adds_variances() {
        let xs = [ValueError::new(1.0, 0.3, 0.1), ValueError::new(2.0, 0.4, 0.0)];
        let s: ValueErrorF64 = xs.iter().copied().sum();
        assert_eq!(s.value(), 3.0);
        assert_relative_eq!(s.stat_error(), 0.5, epsilon = 1e-15);
        assert_relative_eq!(s.syst_error(), 0.1, epsilon = 1e-15);

        let empty: ValueErrorF64 = std::iter::empty().sum();
        assert_eq!(empty, ValueError::exact(0.0));
    }
}
