use super::{PolarCoordinates, PolarVector2};
use orient_core::{Angle, Scalar};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D vector as a polar vector in the XY plane plus a height along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarCylindricalVector3<T: Scalar = f64> {
    polar: PolarVector2<T>,
    height: T,
}

impl<T: Scalar> PolarCylindricalVector3<T> {
    pub fn new(length: T, angle: Angle, height: T) -> Self {
        Self::from_polar(PolarVector2::new(length, angle), height)
    }

    pub fn from_polar(polar: PolarVector2<T>, height: T) -> Self {
        Self { polar, height }
    }

    #[inline]
    pub fn polar(&self) -> PolarVector2<T> {
        self.polar
    }

    #[inline]
    pub fn angle(&self) -> Angle {
        self.polar.angle()
    }

    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    pub fn set_angle(&mut self, angle: Angle) {
        self.polar.set_angle(angle);
    }

    pub fn set_height(&mut self, height: T) {
        self.height = height;
    }

    /// See [`canonical_cylindrical`].
    pub fn canonical(&self) -> Self {
        canonical_cylindrical(self)
    }
}

impl<T: Scalar> PolarCoordinates<T> for PolarCylindricalVector3<T> {
    #[inline]
    fn length(&self) -> T {
        self.polar.length()
    }

    fn set_length(&mut self, length: T) {
        self.polar.set_length(length);
    }
}

/// Canonicalizes the in-plane polar vector; the height is left as is.
pub fn canonical_cylindrical<T: Scalar>(
    p: &PolarCylindricalVector3<T>,
) -> PolarCylindricalVector3<T> {
    PolarCylindricalVector3::from_polar(p.polar.canonical(), p.height)
}

/// `(1.00, 90, 2.00)`: length, angle in whole degrees, height.
impl<T: Scalar> fmt::Display for PolarCylindricalVector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {}, {:.2})",
            self.polar.length(),
            self.polar.angle().whole_degrees(),
            self.height
        )
    }
}
