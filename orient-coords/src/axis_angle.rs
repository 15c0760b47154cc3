use orient_core::{Angle, Scalar, Vector3};
use std::fmt;

/// A rotation of `angle` about `axis`.
///
/// The axis need not be unit length; conversions normalize it (in `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle<T: Scalar = f64> {
    axis: Vector3<T>,
    angle: Angle,
}

impl<T: Scalar> AxisAngle<T> {
    pub fn new(axis: Vector3<T>, angle: Angle) -> Self {
        Self { axis, angle }
    }

    #[inline]
    pub fn axis(&self) -> Vector3<T> {
        self.axis
    }

    #[inline]
    pub fn angle(&self) -> Angle {
        self.angle
    }
}

/// `([x, y, z], a)`, angle in whole degrees.
impl<T: Scalar> fmt::Display for AxisAngle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.axis, self.angle.whole_degrees())
    }
}
