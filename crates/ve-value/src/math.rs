//! Transcendental functions of a [`ValueError`].
//!
//! Each function maps `z` to `f(z.value)` and scales both errors by
//! `|f'(z.value)|`, the first-order propagation rule. The statistical and
//! systematic channels go through the same derivative and stay separate.
//!
//! Inputs outside a function's domain are not checked: the host primitives
//! decide (NaN or infinities), and the propagated errors follow suit. Where
//! the derivative itself is infinite, as for `sqrt` or `powf(k < 1)` at
//! zero, the error is `inf * 0` even for an exact input and comes out NaN.
//!
//! The free functions mirror the methods so formulas can be written in the
//! familiar `sin(x)` style:
//! ```
//! use ve_value::{math, ValueError};
//!
//! let a = ValueError::with_stat(-2.0, 0.1);
//! let e = math::exp(a);
//! assert_eq!(e.value(), (-2.0_f64).exp());
//! assert!((e.stat_error() - (-2.0_f64).exp() * 0.1).abs() < 1e-15);
//! ```

use crate::real::Real;
use crate::value::ValueError;

impl<T: Real> ValueError<T> {
    /// Result `value` with both errors of `self` scaled by `derivative`.
    #[inline]
    fn propagate(self, value: T, derivative: T) -> Self {
        Self::new(value, derivative * self.stat_error(), derivative * self.syst_error())
    }

    /// Sine: `|d/dx sin(x)| = |cos(x)|`.
    pub fn sin(self) -> Self {
        let x = self.value();
        self.propagate(x.sin(), x.cos().abs())
    }

    /// Cosine: `|d/dx cos(x)| = |sin(x)|`.
    pub fn cos(self) -> Self {
        let x = self.value();
        self.propagate(x.cos(), x.sin().abs())
    }

    /// Tangent: `d/dx tan(x) = 1 + tan(x)^2`.
    pub fn tan(self) -> Self {
        let t = self.value().tan();
        self.propagate(t, T::one() + t * t)
    }

    /// Hyperbolic sine: `|d/dx sinh(x)| = cosh(x)`.
    pub fn sinh(self) -> Self {
        let x = self.value();
        self.propagate(x.sinh(), x.cosh().abs())
    }

    /// Hyperbolic cosine: `|d/dx cosh(x)| = |sinh(x)|`.
    pub fn cosh(self) -> Self {
        let x = self.value();
        self.propagate(x.cosh(), x.sinh().abs())
    }

    /// Hyperbolic tangent: `d/dx tanh(x) = 1 - tanh(x)^2`.
    pub fn tanh(self) -> Self {
        let t = self.value().tanh();
        self.propagate(t, (T::one() - t * t).abs())
    }

    /// Exponential: `d/dx exp(x) = exp(x)`.
    pub fn exp(self) -> Self {
        let e = self.value().exp();
        self.propagate(e, e)
    }

    /// Natural logarithm: `|d/dx ln(x)| = |1/x|`.
    pub fn ln(self) -> Self {
        let x = self.value();
        self.propagate(x.ln(), (T::one() / x).abs())
    }

    /// Base-10 logarithm: `|d/dx log10(x)| = |1/(x ln 10)|`.
    pub fn log10(self) -> Self {
        let x = self.value();
        self.propagate(x.log10(), (T::one() / (x * T::LN_10)).abs())
    }

    /// Square root: `d/dx sqrt(x) = 1/(2 sqrt(x))`.
    pub fn sqrt(self) -> Self {
        let s = self.value().sqrt();
        self.propagate(s, T::one() / ((T::one() + T::one()) * s))
    }

    /// Power with an exact exponent: `|d/dx x^k| = |k x^(k-1)|`.
    pub fn powf(self, k: T) -> Self {
        let x = self.value();
        self.propagate(x.powf(k), (k * x.powf(k - T::one())).abs())
    }

    /// Exact base raised to an uncertain exponent: `d/dz k^z = k^z ln(k)`.
    ///
    /// The base carries no error, so only the errors of `z` propagate.
    pub fn pow_base(k: T, z: Self) -> Self {
        let r = k.powf(z.value());
        z.propagate(r, r * k.ln())
    }

    /// Power with both base and exponent uncertain.
    ///
    /// The partials `y x^(y-1)` and `x^y ln(x)` are combined in quadrature,
    /// separately for each error channel.
    pub fn pow(self, exponent: Self) -> Self {
        let (x, y) = (self.value(), exponent.value());
        let r = x.powf(y);
        let d_base = y * x.powf(y - T::one());
        let d_exp = r * x.ln();
        let quad = |a: T, b: T| (a * a + b * b).sqrt();
        Self::new(
            r,
            quad(d_base * self.stat_error(), d_exp * exponent.stat_error()),
            quad(d_base * self.syst_error(), d_exp * exponent.syst_error()),
        )
    }
}

/// Sine of `z`.
pub fn sin<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.sin()
}

/// Cosine of `z`.
pub fn cos<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.cos()
}

/// Tangent of `z`.
pub fn tan<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.tan()
}

/// Hyperbolic sine of `z`.
pub fn sinh<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.sinh()
}

/// Hyperbolic cosine of `z`.
pub fn cosh<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.cosh()
}

/// Hyperbolic tangent of `z`.
pub fn tanh<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.tanh()
}

/// Base-e exponential of `z`.
pub fn exp<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.exp()
}

/// Natural logarithm of `z`.
pub fn log<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.ln()
}

/// Base-10 logarithm of `z`.
pub fn log10<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.log10()
}

/// Square root of `z`.
pub fn sqrt<T: Real>(z: ValueError<T>) -> ValueError<T> {
    z.sqrt()
}

/// `z` raised to the exact power `k`.
pub fn powf<T: Real>(z: ValueError<T>, k: T) -> ValueError<T> {
    z.powf(k)
}

/// Exact `k` raised to the power `z`.
pub fn pow_base<T: Real>(k: T, z: ValueError<T>) -> ValueError<T> {
    ValueError::pow_base(k, z)
}

/// `x` raised to the power `y`, both uncertain.
pub fn pow<T: Real>(x: ValueError<T>, y: ValueError<T>) -> ValueError<T> {
    x.pow(y)
}
