use super::{abs_length, fold_beyond_half_pi, wrap_beyond_pi, PolarCoordinates};
use crate::constants::CLASSIC_POLE_TOLERANCE;
use orient_core::{Angle, Scalar};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spherical coordinates in the physics convention.
///
/// `horizontal` is the azimuth from +X toward +Y, `vertical` the angle from the
/// +Z pole: `x = l·sin v·cos h`, `y = l·sin v·sin h`, `z = l·cos v`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassicPolarVector3<T: Scalar = f64> {
    length: T,
    horizontal: Angle,
    vertical: Angle,
}

impl<T: Scalar> ClassicPolarVector3<T> {
    pub fn new(length: T, horizontal: Angle, vertical: Angle) -> Self {
        Self {
            length,
            horizontal,
            vertical,
        }
    }

    #[inline]
    pub fn horizontal(&self) -> Angle {
        self.horizontal
    }

    #[inline]
    pub fn vertical(&self) -> Angle {
        self.vertical
    }

    pub fn set_horizontal(&mut self, horizontal: Angle) {
        self.horizontal = horizontal;
    }

    pub fn set_vertical(&mut self, vertical: Angle) {
        self.vertical = vertical;
    }

    /// See [`canonical_classic`].
    pub fn canonical(&self) -> Self {
        canonical_classic(self)
    }
}

impl<T: Scalar> PolarCoordinates<T> for ClassicPolarVector3<T> {
    #[inline]
    fn length(&self) -> T {
        self.length
    }

    fn set_length(&mut self, length: T) {
        self.length = length;
    }
}

/// Canonical form: length ≥ 0, vertical in [-π/2, π/2], horizontal in
/// (-π, π] or zero at the pole.
///
/// 1. Zero length zeroes both angles.
/// 2. Negative length: negate it, turn horizontal by π, negate vertical.
/// 3. Vertical beyond ±π/2 is folded back, turning horizontal by π when the
///    fold crosses a pole.
/// 4. `|vertical| <= CLASSIC_POLE_TOLERANCE` zeroes horizontal; otherwise a
///    horizontal beyond ±π is wrapped.
pub fn canonical_classic<T: Scalar>(p: &ClassicPolarVector3<T>) -> ClassicPolarVector3<T> {
    if p.is_zero_length() {
        return ClassicPolarVector3::new(p.length, Angle::ZERO, Angle::ZERO);
    }

    let (length, negated) = abs_length(p.length);
    let mut horizontal = p.horizontal;
    let mut vertical = p.vertical;
    if negated {
        horizontal += Angle::PI;
        vertical = -vertical;
    }

    let (folded, flip) = fold_beyond_half_pi(vertical);
    vertical = folded;
    if flip {
        horizontal += Angle::PI;
    }

    if vertical.abs() <= Angle::from_radians(CLASSIC_POLE_TOLERANCE) {
        log::trace!(
            "canonical_classic: vertical {:e} rad is on the pole, zeroing horizontal",
            vertical.radians()
        );
        horizontal = Angle::ZERO;
    } else {
        horizontal = wrap_beyond_pi(horizontal);
    }

    ClassicPolarVector3::new(length, horizontal, vertical)
}

/// `(1.00, 0, 45)`: length, horizontal and vertical in whole degrees.
impl<T: Scalar> fmt::Display for ClassicPolarVector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {}, {})",
            self.length,
            self.horizontal.whole_degrees(),
            self.vertical.whole_degrees()
        )
    }
}
