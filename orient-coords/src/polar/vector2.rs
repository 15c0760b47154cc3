use super::{abs_length, wrap_beyond_pi, PolarCoordinates};
use orient_core::{Angle, Scalar};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector as a length and an angle from +X toward +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarVector2<T: Scalar = f64> {
    length: T,
    angle: Angle,
}

impl<T: Scalar> PolarVector2<T> {
    pub fn new(length: T, angle: Angle) -> Self {
        Self { length, angle }
    }

    #[inline]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn set_angle(&mut self, angle: Angle) {
        self.angle = angle;
    }

    /// See [`canonical_polar_vector2`].
    pub fn canonical(&self) -> Self {
        canonical_polar_vector2(self)
    }
}

impl<T: Scalar> PolarCoordinates<T> for PolarVector2<T> {
    #[inline]
    fn length(&self) -> T {
        self.length
    }

    fn set_length(&mut self, length: T) {
        self.length = length;
    }
}

/// Canonical form: length ≥ 0 and angle in (-π, π].
///
/// A zero length zeroes the angle. A negative length is negated and the angle
/// turned by π. The angle is then wrapped if its magnitude exceeds π.
///
/// ```
/// use orient_coords::polar::{canonical_polar_vector2, PolarCoordinates, PolarVector2};
/// use orient_core::Angle;
///
/// let p = canonical_polar_vector2(&PolarVector2::new(-2.0, Angle::from_degrees(30)));
/// assert_eq!(p.length(), 2.0);
/// assert_eq!(p.angle(), Angle::from_degrees(-150));
/// ```
pub fn canonical_polar_vector2<T: Scalar>(p: &PolarVector2<T>) -> PolarVector2<T> {
    if p.is_zero_length() {
        return PolarVector2::new(p.length, Angle::ZERO);
    }
    let (length, negated) = abs_length(p.length);
    let angle = if negated { p.angle + Angle::PI } else { p.angle };
    PolarVector2::new(length, wrap_beyond_pi(angle))
}

/// `(1.00, 90)`: length with two decimals, angle in whole degrees.
impl<T: Scalar> fmt::Display for PolarVector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {})", self.length, self.angle.whole_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d)
    }

    #[test]
    fn test_zero_length_zeroes_angle() {
        let p = PolarVector2::new(0.0, deg(123.0)).canonical();
        assert_eq!(p.length(), 0.0);
        assert_eq!(p.angle(), Angle::ZERO);
    }

    #[test]
    fn test_negative_length() {
        let p = PolarVector2::new(-1.0, deg(90.0)).canonical();
        assert_eq!(p.length(), 1.0);
        assert_eq!(p.angle(), deg(-90.0));
    }

    #[test]
    fn test_wrap_only_beyond_pi() {
        assert_eq!(PolarVector2::new(1.0, Angle::PI).canonical().angle(), Angle::PI);
        assert_eq!(PolarVector2::new(1.0, deg(270.0)).canonical().angle(), deg(-90.0));
        assert_eq!(PolarVector2::new(1.0, deg(-725.0)).canonical().angle(), deg(-5.0));
    }

    #[test]
    fn test_half_turn_has_one_encoding() {
        for angle in [-Angle::PI, Angle::PI * 3.0, deg(-540.0)] {
            assert_eq!(PolarVector2::new(1.0, angle).canonical().angle(), Angle::PI);
        }
        let p = PolarVector2::new(-1.0, Angle::ZERO).canonical();
        assert_eq!(p.angle(), Angle::PI);
    }

    #[test]
    fn test_integer_length() {
        let p = PolarVector2::new(-3i32, deg(0.0)).canonical();
        assert_eq!(p.length(), 3);
        assert_eq!(p.angle(), Angle::PI);
    }

    #[test]
    fn test_setters() {
        let mut p = PolarVector2::new(1.0, Angle::ZERO);
        p.set_length(4.0);
        p.set_angle(deg(10.0));
        assert_eq!(p, PolarVector2::new(4.0, deg(10.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(PolarVector2::new(1.0, deg(90.0)).to_string(), "(1.00, 90)");
        assert_eq!(PolarVector2::new(2i64, deg(-44.6)).to_string(), "(2, -45)");
    }

    proptest! {
        #[test]
        fn prop_canonical_is_idempotent(len in -100.0..100.0f64, a in -20.0..20.0f64) {
            let once = PolarVector2::new(len, Angle::from_radians(a)).canonical();
            let twice = once.canonical();
            prop_assert_eq!(once, twice);
            prop_assert!(once.length() >= 0.0);
            prop_assert!(once.angle() <= Angle::PI && once.angle() > -Angle::PI);
        }
    }
}
