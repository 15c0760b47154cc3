//! Tolerances used by the canonical forms.
//!
//! The classic form compares its vertical angle against an absolute radian
//! threshold. The heading/pitch form compares pitch against a fraction of π/2.

use orient_core::Angle;

/// A classic polar vector whose |vertical| is at or below this many radians
/// is treated as lying on the +Z pole, and its horizontal angle is zeroed.
pub const CLASSIC_POLE_TOLERANCE: f64 = 0.0001;

/// A heading/pitch polar vector whose |pitch| is at or above this fraction of
/// π/2 is treated as lying on a pole, and its heading is zeroed.
pub const HEADING_PITCH_POLE_FACTOR: f64 = 0.9999;

/// The heading/pitch pole threshold as an angle.
pub(crate) fn heading_pitch_pole_limit() -> Angle {
    Angle::HALF_PI * HEADING_PITCH_POLE_FACTOR
}

/// 270°, the heading offset between the classic and heading/pitch conventions.
pub(crate) const THREE_HALF_PI: Angle = Angle::from_radians(3.0 * orient_core::constants::HALF_PI);
