use super::{abs_length, fold_beyond_half_pi, wrap_beyond_pi, PolarCoordinates};
use crate::constants::heading_pitch_pole_limit;
use orient_core::{Angle, Scalar};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spherical coordinates in the aviation convention.
///
/// Heading turns about +Y starting from +Z, pitch is positive downward:
/// `x = l·cos p·sin h`, `y = -l·sin p`, `z = l·cos p·cos h`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarVector3<T: Scalar = f64> {
    length: T,
    heading: Angle,
    pitch: Angle,
}

impl<T: Scalar> PolarVector3<T> {
    pub fn new(length: T, heading: Angle, pitch: Angle) -> Self {
        Self {
            length,
            heading,
            pitch,
        }
    }

    #[inline]
    pub fn heading(&self) -> Angle {
        self.heading
    }

    #[inline]
    pub fn pitch(&self) -> Angle {
        self.pitch
    }

    pub fn set_heading(&mut self, heading: Angle) {
        self.heading = heading;
    }

    pub fn set_pitch(&mut self, pitch: Angle) {
        self.pitch = pitch;
    }

    /// See [`canonical_polar_vector3`].
    pub fn canonical(&self) -> Self {
        canonical_polar_vector3(self)
    }
}

impl<T: Scalar> PolarCoordinates<T> for PolarVector3<T> {
    #[inline]
    fn length(&self) -> T {
        self.length
    }

    fn set_length(&mut self, length: T) {
        self.length = length;
    }
}

/// Canonical form: length ≥ 0, pitch in [-π/2, π/2], heading in (-π, π] or
/// zero at a pole.
///
/// Same steps as [`canonical_classic`](super::canonical_classic), except that
/// the pole test is `|pitch| >= HEADING_PITCH_POLE_FACTOR · π/2`.
///
/// ```
/// use orient_coords::polar::{canonical_polar_vector3, PolarVector3};
/// use orient_core::Angle;
///
/// let p = canonical_polar_vector3(&PolarVector3::new(
///     1.0,
///     Angle::from_degrees(30),
///     Angle::from_degrees(89.995),
/// ));
/// assert_eq!(p.heading(), Angle::ZERO);
/// ```
pub fn canonical_polar_vector3<T: Scalar>(p: &PolarVector3<T>) -> PolarVector3<T> {
    if p.is_zero_length() {
        return PolarVector3::new(p.length, Angle::ZERO, Angle::ZERO);
    }

    let (length, negated) = abs_length(p.length);
    let mut heading = p.heading;
    let mut pitch = p.pitch;
    if negated {
        heading += Angle::PI;
        pitch = -pitch;
    }

    let (folded, flip) = fold_beyond_half_pi(pitch);
    pitch = folded;
    if flip {
        heading += Angle::PI;
    }

    if pitch.abs() >= heading_pitch_pole_limit() {
        log::trace!(
            "canonical_polar_vector3: pitch {} is on a pole, zeroing heading",
            pitch
        );
        heading = Angle::ZERO;
    } else {
        heading = wrap_beyond_pi(heading);
    }

    PolarVector3::new(length, heading, pitch)
}

/// `(1.00, 45, -10)`: length, heading and pitch in whole degrees.
impl<T: Scalar> fmt::Display for PolarVector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {}, {})",
            self.length,
            self.heading.whole_degrees(),
            self.pitch.whole_degrees()
        )
    }
}
