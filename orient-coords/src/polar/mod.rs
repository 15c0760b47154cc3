//! Polar and spherical vector forms and their canonical reduction.
//!
//! | Type | Coordinates | Convention |
//! |------|-------------|------------|
//! | [`PolarVector2`] | length, angle | angle from +X toward +Y |
//! | [`PolarCylindricalVector3`] | [`PolarVector2`] + height | height along +Z |
//! | [`ClassicPolarVector3`] | length, horizontal, vertical | physics: vertical measured from the +Z pole |
//! | [`PolarVector3`] | length, heading, pitch | aviation: heading about +Y from +Z, pitch down is positive |
//!
//! The forms share accessor shape through [`PolarCoordinates`], but each has its
//! own reduction rules, exposed as a free function per form
//! ([`canonical_polar_vector2`], [`canonical_cylindrical`],
//! [`canonical_classic`], [`canonical_polar_vector3`]) and as a `canonical()`
//! method. [`PolarForm`] wraps any of the four for code that handles them
//! uniformly.
//!
//! # Canonical form
//!
//! - A zero length zeroes every angle.
//! - A negative length is made positive by turning the direction half a turn.
//! - The vertical/pitch angle is folded into [-π/2, π/2], turning the
//!   horizontal/heading angle by π when the fold crosses a pole.
//! - Near a pole the horizontal/heading angle is meaningless and is zeroed. The
//!   classic form snaps when `|vertical| <=`
//!   [`CLASSIC_POLE_TOLERANCE`](crate::constants::CLASSIC_POLE_TOLERANCE); the
//!   heading/pitch form when `|pitch| >=`
//!   [`HEADING_PITCH_POLE_FACTOR`](crate::constants::HEADING_PITCH_POLE_FACTOR)` · π/2`.
//! - Otherwise an angle whose magnitude exceeds π is wrapped to (-π, π].
//!
//! Angles already inside (-π, π] are left alone. An angle equal to -π, given
//! or produced by the wrap, is reported as +π, so every direction has one
//! encoding.
//!
//! ```
//! use orient_coords::polar::{ClassicPolarVector3, PolarCoordinates};
//! use orient_core::Angle;
//!
//! let p = ClassicPolarVector3::new(-1.0, Angle::ZERO, Angle::ZERO).canonical();
//! assert_eq!(p.length(), 1.0);
//! assert_eq!(p.horizontal(), Angle::ZERO);
//! assert_eq!(p.vertical(), Angle::ZERO);
//! ```

mod classic;
mod cylindrical;
mod form;
mod heading_pitch;
mod vector2;

pub use classic::{canonical_classic, ClassicPolarVector3};
pub use cylindrical::{canonical_cylindrical, PolarCylindricalVector3};
pub use form::PolarForm;
pub use heading_pitch::{canonical_polar_vector3, PolarVector3};
pub use vector2::{canonical_polar_vector2, PolarVector2};

use orient_core::angle::reduce_two_pi;
use orient_core::{Angle, Scalar};

/// Accessors shared by every polar form.
pub trait PolarCoordinates<T: Scalar> {
    /// Radial length. For the cylindrical form this is the in-plane radius.
    fn length(&self) -> T;

    fn set_length(&mut self, length: T);

    fn is_zero_length(&self) -> bool {
        self.length() == T::ZERO
    }
}

/// Wraps to (-π, π] when `|angle| > π` (tolerant ordering). An angle equal
/// to -π, given or produced by the wrap, becomes +π.
pub(crate) fn wrap_beyond_pi(angle: Angle) -> Angle {
    let wrapped = if angle.abs() > Angle::PI {
        angle.wrapped()
    } else {
        angle
    };
    if wrapped == -Angle::PI {
        Angle::PI
    } else {
        wrapped
    }
}

/// Folds an elevation-like angle beyond ±π/2 back into range. Returns the
/// folded angle and whether the azimuth-like angle must turn by π.
pub(crate) fn fold_beyond_half_pi(angle: Angle) -> (Angle, bool) {
    if angle.abs() <= Angle::HALF_PI {
        return (angle, false);
    }
    let shifted = Angle::from_radians(reduce_two_pi((angle + Angle::HALF_PI).radians()));
    if shifted > Angle::PI {
        (Angle::PI + Angle::HALF_PI - shifted, true)
    } else {
        (shifted - Angle::HALF_PI, false)
    }
}

/// Length made non-negative: returns the new length and whether it was negated.
/// An integer minimum saturates to the maximum.
pub(crate) fn abs_length<T: Scalar>(length: T) -> (T, bool) {
    if length < T::ZERO {
        (length.saturating_neg(), true)
    } else {
        (length, false)
    }
}
