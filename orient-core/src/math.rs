//! Scalar element trait and epsilon-tolerant float comparisons.
//!
//! [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) are generic over a
//! [`Scalar`] element. Integer elements compare exactly, float elements compare
//! within their own machine epsilon.

use crate::constants::EPSILON;
use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// `|left - right| < EPSILON`.
#[inline]
pub fn are_floats_equal(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

/// `left ≈ right` or `left > right`.
#[inline]
pub fn is_float_equal_or_larger(left: f64, right: f64) -> bool {
    are_floats_equal(left, right) || left > right
}

/// Clamps to [-1, 1] so `asin`/`acos` never see a value pushed past the
/// domain boundary by rounding.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Element type for vectors and matrices.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    const ZERO: Self;
    const ONE: Self;

    /// `true` for integer element types.
    const IS_INTEGER: bool;

    /// Converts from `f64`, truncating toward zero for integer types.
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;

    /// Exact for integers, within the type's machine epsilon for floats.
    fn approx_eq(self, other: Self) -> bool;

    /// Negation that saturates at the integer bounds instead of overflowing.
    fn saturating_neg(self) -> Self;
}

macro_rules! impl_scalar_float {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const IS_INTEGER: bool = false;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                (self - other).abs() < <$t>::EPSILON
            }

            #[inline]
            fn saturating_neg(self) -> Self {
                -self
            }
        }
    };
}

macro_rules! impl_scalar_int {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const IS_INTEGER: bool = true;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn saturating_neg(self) -> Self {
                <$t>::saturating_neg(self)
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);
impl_scalar_int!(i32);
impl_scalar_int!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_are_floats_equal_is_absolute() {
        assert!(are_floats_equal(1.0, 1.0 + 1e-8));
        assert!(!are_floats_equal(1.0, 1.0 + 1e-6));
        // Large magnitudes: an ulp already exceeds the tolerance.
        assert!(!are_floats_equal(1e9, 1e9 + 1.0));
    }

    #[test]
    fn test_is_float_equal_or_larger() {
        assert!(is_float_equal_or_larger(1.0, 1.0));
        assert!(is_float_equal_or_larger(1.0 - 1e-9, 1.0));
        assert!(is_float_equal_or_larger(2.0, 1.0));
        assert!(!is_float_equal_or_larger(0.99, 1.0));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.0000001), 1.0);
        assert_eq!(clamp_unit(-1.5), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn test_integer_scalar_is_exact() {
        assert!(3i32.approx_eq(3));
        assert!(!3i64.approx_eq(4));
        assert_eq!(i32::from_f64(2.9), 2);
        assert!(i32::IS_INTEGER);
    }

    #[test]
    fn test_saturating_neg() {
        assert_eq!(Scalar::saturating_neg(i32::MIN), i32::MAX);
        assert_eq!(Scalar::saturating_neg(i64::MIN), i64::MAX);
        assert_eq!(Scalar::saturating_neg(-4i32), 4);
        assert_eq!(Scalar::saturating_neg(2.5f64), -2.5);
    }

    #[test]
    fn test_float_scalar_uses_own_epsilon() {
        assert!(1.0f32.approx_eq(1.0 + f32::EPSILON / 2.0));
        assert!(!1.0f64.approx_eq(1.0 + 1e-12));
        assert!(!f64::IS_INTEGER);
    }
}
