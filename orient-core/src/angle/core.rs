//! Core angle type.
//!
//! [`Angle`] stores a single radian value. Everything else in the workspace
//! (Euler angles, polar forms, rotation matrices) is expressed in terms of it.
//!
//! # Equality
//!
//! Angles compare with an absolute tolerance of [`EPSILON`]: two angles are
//! equal when their radian values differ by less than the single-precision
//! machine epsilon. The tolerance does not scale with magnitude, so comparisons
//! of very large angles (thousands of radians) degrade to exact comparison.
//!
//! Ordering is derived from that equality: `a < b` only holds when `a != b` and
//! the raw radians compare less, so two angles are never "equal and less".
//!
//! ```
//! use orient_core::Angle;
//!
//! let a = Angle::from_radians(1.0);
//! let b = Angle::from_radians(1.0 + 1e-9);
//! assert_eq!(a, b);
//! assert!(!(a < b));
//! assert!(a <= b);
//! ```
//!
//! # Construction
//!
//! ```
//! use orient_core::Angle;
//!
//! let right = Angle::from_degrees(90);
//! assert!((right.radians() - 1.5708).abs() < 1e-4);
//! assert_eq!(right, Angle::HALF_PI);
//!
//! let half_turn = Angle::PI;
//! assert_eq!(half_turn * 2.0, Angle::TWO_PI);
//! ```

use crate::constants::{EPSILON, HALF_PI, PI, TWOPI};
use crate::math::are_floats_equal;
use std::cmp::Ordering;

/// An angle stored as radians.
#[derive(Copy, Clone, Debug, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// π radians (180°).
    pub const PI: Self = Self { rad: PI };

    /// 2π radians (360°).
    pub const TWO_PI: Self = Self { rad: TWOPI };

    /// π/2 radians (90°). Pitch at gimbal lock, latitude at a pole.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees. Accepts any numeric type that widens to `f64`.
    ///
    /// ```
    /// use orient_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(180), Angle::PI);
    /// assert_eq!(Angle::from_degrees(-90.0f32), -Angle::HALF_PI);
    /// ```
    #[inline]
    pub fn from_degrees<T: Into<f64>>(deg: T) -> Self {
        Self {
            rad: deg.into().to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Degrees rounded to the nearest integer. Used by the `Display` impls.
    #[inline]
    pub fn whole_degrees(self) -> i64 {
        self.degrees().round() as i64
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn tan(self) -> f64 {
        libm::tan(self.rad)
    }

    /// Returns the angle itself if it is greater than zero, its negation otherwise.
    ///
    /// "Greater than zero" uses the epsilon-aware ordering, so an angle within
    /// [`EPSILON`] of zero is negated. The result still compares equal to zero.
    ///
    /// ```
    /// use orient_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(-45).abs(), Angle::from_degrees(45));
    /// assert_eq!(Angle::ZERO.abs(), Angle::ZERO);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        if self > Self::ZERO {
            self
        } else {
            -self
        }
    }

    /// Wraps into [-π, π) with the floor-based reduction.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(super::normalize::wrap_pm_pi(self.rad))
    }

    /// Reduces into [0, 2π) with the floor-based reduction.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_radians(super::normalize::reduce_two_pi(self.rad))
    }

    /// Returns `true` if the radian value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}

impl PartialEq for Angle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        are_floats_equal(self.rad, other.rad)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.rad.partial_cmp(&other.rad)
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
///
/// ```
/// use orient_core::angle::deg;
///
/// assert_eq!(deg(45.0) * 2.0, deg(90.0));
/// ```
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}
