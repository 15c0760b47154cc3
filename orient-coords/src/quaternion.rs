//! Rotation quaternions.
//!
//! A [`Quaternion`] is `w + xi + yj + zk`. Rotations use unit quaternions; the
//! type does not enforce unit magnitude, that is the caller's job.
//!
//! # Composition
//!
//! `left * right` is the Hamilton product. As rotations it applies `right`
//! first and `left` second, matching [`Quaternion::rotate`] (`q v q*`):
//!
//! ```
//! use orient_coords::{AxisAngle, Quaternion};
//! use orient_coords::convert::axis_angle_to_quaternion;
//! use orient_core::{Angle, Vector3};
//!
//! let about_z = axis_angle_to_quaternion(&AxisAngle::new(
//!     Vector3::new([0.0, 0.0, 1.0]),
//!     Angle::from_degrees(90),
//! )).unwrap();
//! let about_x = axis_angle_to_quaternion(&AxisAngle::new(
//!     Vector3::new([1.0, 0.0, 0.0]),
//!     Angle::from_degrees(90),
//! )).unwrap();
//!
//! // x̂ turns to ŷ about Z, then ŷ turns to ẑ about X.
//! let v = (about_x * about_z).rotate(&Vector3::new([1.0, 0.0, 0.0]));
//! assert!(v.approx_eq_within(&Vector3::new([0.0, 0.0, 1.0]), 1e-12));
//! ```
//!
//! # Value semantics
//!
//! [`conjugate`](Quaternion::conjugate), [`inverse`](Quaternion::inverse) and
//! [`exponentiate`](Quaternion::exponentiate) return new quaternions. The free
//! functions at the bottom of the module mirror the methods for callers that
//! prefer `magnitude(&q)` over `q.magnitude()`.

use crate::{CoordError, CoordResult};
use orient_core::math::{are_floats_equal, clamp_unit};
use orient_core::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `w + xi + yj + zk`.
///
/// `==` compares components within [`EPSILON`](orient_core::constants::EPSILON).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// The rotation that does nothing.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Builds from a scalar part and a vector part.
    pub fn from_parts(w: f64, v: Vector3<f64>) -> Self {
        Self::new(w, v.x(), v.y(), v.z())
    }

    #[inline]
    pub fn vector_part(&self) -> Vector3<f64> {
        Vector3::new([self.x, self.y, self.z])
    }

    /// `[w, x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `w ≈ 1`.
    pub fn is_identity(&self) -> bool {
        are_floats_equal(self.w, 1.0)
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Conjugate divided by the magnitude.
    ///
    /// For a unit quaternion this is the exact inverse rotation. The magnitude
    /// is taken before conjugating. A zero quaternion has no inverse.
    pub fn inverse(&self) -> CoordResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(CoordError::invalid_argument(
                "Quaternion::inverse",
                "quaternion has zero magnitude",
            ));
        }
        let c = self.conjugate();
        Ok(Self::new(c.w / mag, c.x / mag, c.y / mag, c.z / mag))
    }

    /// Raises the rotation to a power: the same axis, `exponent` times the angle.
    ///
    /// The identity is returned unchanged.
    ///
    /// ```
    /// use orient_coords::Quaternion;
    ///
    /// let half_turn_about_z = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    /// let quarter = half_turn_about_z.exponentiate(0.5);
    /// let s = 0.5f64.sqrt();
    /// assert!(quarter.approx_eq_within(&Quaternion::new(s, 0.0, 0.0, s), 1e-12));
    /// ```
    pub fn exponentiate(&self, exponent: f64) -> Self {
        if self.is_identity() {
            log::trace!("Quaternion::exponentiate: identity raised to {}", exponent);
            return *self;
        }
        let alpha = libm::acos(clamp_unit(self.w));
        let new_alpha = alpha * exponent;
        let mult = libm::sin(new_alpha) / libm::sin(alpha);
        Self::new(
            libm::cos(new_alpha),
            self.x * mult,
            self.y * mult,
            self.z * mult,
        )
    }

    /// Hamilton product `self ∘ other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let v1 = self.vector_part();
        let v2 = other.vector_part();
        let w = self.w * other.w - v1.dot(&v2);
        let v = v2 * self.w + v1 * other.w + v1.cross(&v2);
        Self::from_parts(w, v)
    }

    /// `self ∘ other⁻¹`: the rotation taking `other` to `self`.
    pub fn subtract(&self, other: &Self) -> CoordResult<Self> {
        Ok(self.multiply(&other.inverse()?))
    }

    /// Rotates `v` by this (unit) quaternion: `q (0, v) q*`.
    pub fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let u = self.vector_part();
        let t = u.cross(v) * 2.0;
        *v + t * self.w + u.cross(&t)
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq_within(&self, other: &Self, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| are_floats_equal(*a, *b))
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.multiply(rhs)
    }
}

/// `(w, [x, y, z])` with two decimals.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, [{:.2}, {:.2}, {:.2}])",
            self.w, self.x, self.y, self.z
        )
    }
}

pub fn magnitude(q: &Quaternion) -> f64 {
    q.magnitude()
}

pub fn dot_product(left: &Quaternion, right: &Quaternion) -> f64 {
    left.dot(right)
}

pub fn is_identity(q: &Quaternion) -> bool {
    q.is_identity()
}

pub fn conjugate(q: &Quaternion) -> Quaternion {
    q.conjugate()
}

pub fn exponentiate(q: &Quaternion, exponent: f64) -> Quaternion {
    q.exponentiate(exponent)
}

pub fn multiply(left: &Quaternion, right: &Quaternion) -> Quaternion {
    left.multiply(right)
}

pub fn subtract(left: &Quaternion, right: &Quaternion) -> CoordResult<Quaternion> {
    left.subtract(right)
}
