//! Arithmetic operators for [`Angle`].
//!
//! `+`, `-`, unary `-`, scaling by `f64` from either side, division by `f64`,
//! and `Angle / Angle` giving a unitless ratio. Compound assignment forms
//! follow the binary ones.

use super::core::Angle;
use std::ops::*;

/// Angle + Angle → Angle
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

/// Angle - Angle → Angle
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

/// Angle * scalar → Angle
impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.radians() * k)
    }
}

/// scalar * Angle → Angle
impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, a: Angle) -> Angle {
        a * self
    }
}

/// Angle / scalar → Angle
impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle::from_radians(self.radians() / k)
    }
}

/// Angle / Angle → ratio
impl Div for Angle {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.radians() / rhs.radians()
    }
}

/// -Angle → Angle
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.radians())
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Angle {
    #[inline]
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

impl DivAssign<f64> for Angle {
    #[inline]
    fn div_assign(&mut self, k: f64) {
        *self = *self / k;
    }
}
