//! [`Real`] trait: abstraction over `f32` and `f64` that lets every
//! propagation formula be written once and reused for both precisions.

use std::fmt::{Debug, Display, LowerExp, UpperExp};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A floating-point scalar usable as the representation of a
/// [`ValueError`](crate::value::ValueError).
///
/// The math methods forward to the host implementation; they are the only
/// primitives the propagation code calls.
pub trait Real:
    Copy
    + Debug
    + Display
    + LowerExp
    + UpperExp
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// `ln(10)`.
    const LN_10: Self;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Convert from `f64` (narrowing for `f32`).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Tangent.
    fn tan(self) -> Self;

    /// Hyperbolic sine.
    fn sinh(self) -> Self;

    /// Hyperbolic cosine.
    fn cosh(self) -> Self;

    /// Hyperbolic tangent.
    fn tanh(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Base-10 logarithm.
    fn log10(self) -> Self;

    /// Power with a real exponent.
    fn powf(self, n: Self) -> Self;
}

macro_rules! impl_real {
    ($t:ident) => {
        impl Real for $t {
            const LN_10: Self = std::$t::consts::LN_10;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }

            #[inline]
            fn sinh(self) -> Self {
                $t::sinh(self)
            }

            #[inline]
            fn cosh(self) -> Self {
                $t::cosh(self)
            }

            #[inline]
            fn tanh(self) -> Self {
                $t::tanh(self)
            }

            #[inline]
            fn exp(self) -> Self {
                $t::exp(self)
            }

            #[inline]
            fn ln(self) -> Self {
                $t::ln(self)
            }

            #[inline]
            fn log10(self) -> Self {
                $t::log10(self)
            }

            #[inline]
            fn powf(self, n: Self) -> Self {
                $t::powf(self, n)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
