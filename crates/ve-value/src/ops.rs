//! Arithmetic operators for [`ValueError`].
//!
//! Sums and differences add absolute variances; products and quotients add
//! relative variances and scale back by the squared result. A bare scalar is
//! an exact value: every scalar overload gives the same result as promoting
//! it with [`ValueError::exact`] first.

use crate::real::Real;
use crate::value::ValueError;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// --- Arithmetic: ValueError op ValueError ---

impl<T: Real> Add for ValueError<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_variances(
            self.value() + rhs.value(),
            self.stat_error2() + rhs.stat_error2(),
            self.syst_error2() + rhs.syst_error2(),
        )
    }
}

impl<T: Real> Sub for ValueError<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        // Variances still add: independent errors never cancel.
        Self::from_variances(
            self.value() - rhs.value(),
            self.stat_error2() + rhs.stat_error2(),
            self.syst_error2() + rhs.syst_error2(),
        )
    }
}

impl<T: Real> Mul for ValueError<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // v² (ra + rb) expanded, so a zero central value never divides.
        let (a2, b2) = (self.value2(), rhs.value2());
        Self::from_variances(
            self.value() * rhs.value(),
            a2 * rhs.stat_error2() + self.stat_error2() * b2,
            a2 * rhs.syst_error2() + self.syst_error2() * b2,
        )
    }
}

impl<T: Real> Div for ValueError<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let r = self.value() / rhs.value();
        let r2 = r * r;
        Self::from_variances(
            r,
            r2 * (self.stat_error_rel2() + rhs.stat_error_rel2()),
            r2 * (self.syst_error_rel2() + rhs.syst_error_rel2()),
        )
    }
}

impl<T: Real> Neg for ValueError<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_variances(-self.value(), self.stat_error2(), self.syst_error2())
    }
}

// --- Arithmetic: ValueError op scalar ---

impl<T: Real> Add<T> for ValueError<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::from_variances(self.value() + rhs, self.stat_error2(), self.syst_error2())
    }
}

impl<T: Real> Sub<T> for ValueError<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::from_variances(self.value() - rhs, self.stat_error2(), self.syst_error2())
    }
}

impl<T: Real> Mul<T> for ValueError<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        let k2 = rhs * rhs;
        Self::from_variances(self.value() * rhs, self.stat_error2() * k2, self.syst_error2() * k2)
    }
}

impl<T: Real> Div<T> for ValueError<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        let k2 = rhs * rhs;
        Self::from_variances(self.value() / rhs, self.stat_error2() / k2, self.syst_error2() / k2)
    }
}

// --- Compound assignment ---

impl<T: Real> AddAssign for ValueError<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign for ValueError<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign for ValueError<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> DivAssign for ValueError<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Real> AddAssign<T> for ValueError<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign<T> for ValueError<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign<T> for ValueError<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real> DivAssign<T> for ValueError<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// --- Arithmetic: scalar op ValueError ---

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl Add<ValueError<$t>> for $t {
            type Output = ValueError<$t>;
            #[inline]
            fn add(self, rhs: ValueError<$t>) -> ValueError<$t> {
                rhs + self
            }
        }

        impl Sub<ValueError<$t>> for $t {
            type Output = ValueError<$t>;
            #[inline]
            fn sub(self, rhs: ValueError<$t>) -> ValueError<$t> {
                ValueError::from_variances(self - rhs.value(), rhs.stat_error2(), rhs.syst_error2())
            }
        }

        impl Mul<ValueError<$t>> for $t {
            type Output = ValueError<$t>;
            #[inline]
            fn mul(self, rhs: ValueError<$t>) -> ValueError<$t> {
                rhs * self
            }
        }

        impl Div<ValueError<$t>> for $t {
            type Output = ValueError<$t>;
            #[inline]
            fn div(self, rhs: ValueError<$t>) -> ValueError<$t> {
                let r = self / rhs.value();
                let r2 = r * r;
                ValueError::from_variances(r, r2 * rhs.stat_error_rel2(), r2 * rhs.syst_error_rel2())
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);
