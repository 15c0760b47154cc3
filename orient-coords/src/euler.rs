//! Heading-pitch-bank Euler angles with gimbal-lock handling.
//!
//! [`EulerAngles`] stores three [`Angle`]s. Heading turns about the vertical (Y)
//! axis, pitch about the lateral (X) axis and bank about the longitudinal (Z)
//! axis. As a rotation, bank is applied first, then pitch, then heading.
//!
//! # Gimbal lock
//!
//! When `|pitch| ≈ π/2` heading and bank turn about the same axis and only their
//! combination is meaningful. The type keeps bank at zero in that state:
//!
//! - the constructor and [`set_pitch`](EulerAngles::set_pitch) zero the bank
//!   when the new pitch is locked;
//! - [`set_bank`](EulerAngles::set_bank) is ignored while locked;
//! - [`set_heading`](EulerAngles::set_heading) always applies.
//!
//! ```
//! use orient_coords::EulerAngles;
//! use orient_core::Angle;
//!
//! let mut e = EulerAngles::from_degrees(0.0, 90.0, 45.0);
//! assert!(e.is_gimbal_locked());
//! assert_eq!(e.bank(), Angle::ZERO);
//!
//! e.set_bank(Angle::from_degrees(10));
//! assert_eq!(e.bank(), Angle::ZERO);
//!
//! e.set_pitch(Angle::from_degrees(30));
//! e.set_bank(Angle::from_degrees(10));
//! assert_eq!(e.bank(), Angle::from_degrees(10));
//! ```
//!
//! # Canonical range
//!
//! A triple is canonical when heading ∈ (-π, π], pitch ∈ [-π/2, π/2] and
//! bank ∈ (-π, π]. All comparisons use the tolerant [`Angle`] ordering.
//! [`canonical`](EulerAngles::canonical) maps any triple to the canonical one
//! describing the same orientation:
//!
//! ```
//! use orient_coords::EulerAngles;
//! use orient_core::Angle;
//!
//! let e = EulerAngles::from_degrees(0.0, 100.0, 0.0);
//! assert!(!e.is_canonical());
//!
//! let c = e.canonical();
//! assert!(c.is_canonical());
//! assert_eq!(c.heading(), Angle::from_degrees(180));
//! assert_eq!(c.pitch(), Angle::from_degrees(80));
//! assert_eq!(c.bank(), Angle::from_degrees(180));
//! ```

use orient_core::angle::wrap_pm_pi;
use orient_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Heading, pitch and bank.
///
/// Serialized as a `[heading, pitch, bank]` array of radians; deserializing
/// goes through [`EulerAngles::new`] so the gimbal-lock rule still holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "[Angle; 3]", from = "[Angle; 3]"))]
pub struct EulerAngles {
    heading: Angle,
    pitch: Angle,
    bank: Angle,
}

/// One component of an [`EulerAngles`] outside its canonical range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalViolation {
    Heading,
    Pitch,
    Bank,
}

impl CanonicalViolation {
    pub fn message(self) -> &'static str {
        match self {
            Self::Heading => "Heading angle is out of canonical range",
            Self::Pitch => "Pitch angle is out of canonical range",
            Self::Bank => "Bank angle is out of canonical range",
        }
    }
}

impl fmt::Display for CanonicalViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

fn is_locked_pitch(pitch: Angle) -> bool {
    pitch.abs() == Angle::HALF_PI
}

fn in_pi_range(angle: Angle) -> bool {
    -Angle::PI < angle && angle <= Angle::PI
}

fn in_half_pi_range(angle: Angle) -> bool {
    -Angle::HALF_PI <= angle && angle <= Angle::HALF_PI
}

/// Wraps into (-π, π]: an angle landing on -π is moved to +π.
fn wrap_canonical(angle: Angle) -> Angle {
    let wrapped = Angle::from_radians(wrap_pm_pi(angle.radians()));
    if wrapped == -Angle::PI {
        Angle::PI
    } else {
        wrapped
    }
}

impl EulerAngles {
    /// Creates a triple, zeroing `bank` if `pitch` is gimbal-locked.
    pub fn new(heading: Angle, pitch: Angle, bank: Angle) -> Self {
        let bank = if is_locked_pitch(pitch) && bank != Angle::ZERO {
            log::trace!(
                "EulerAngles::new: pitch {} is gimbal-locked, dropping bank {}",
                pitch,
                bank
            );
            Angle::ZERO
        } else {
            bank
        };
        Self {
            heading,
            pitch,
            bank,
        }
    }

    pub fn from_degrees(heading: f64, pitch: f64, bank: f64) -> Self {
        Self::new(
            Angle::from_degrees(heading),
            Angle::from_degrees(pitch),
            Angle::from_degrees(bank),
        )
    }

    /// The zero rotation.
    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn heading(&self) -> Angle {
        self.heading
    }

    #[inline]
    pub fn pitch(&self) -> Angle {
        self.pitch
    }

    #[inline]
    pub fn bank(&self) -> Angle {
        self.bank
    }

    pub fn set_heading(&mut self, heading: Angle) {
        self.heading = heading;
    }

    /// Sets pitch and zeroes bank if the new pitch is gimbal-locked.
    pub fn set_pitch(&mut self, pitch: Angle) {
        self.pitch = pitch;
        if is_locked_pitch(pitch) && self.bank != Angle::ZERO {
            log::trace!(
                "EulerAngles::set_pitch: pitch {} is gimbal-locked, dropping bank {}",
                pitch,
                self.bank
            );
            self.bank = Angle::ZERO;
        }
    }

    /// Sets bank unless the triple is gimbal-locked, in which case the call is ignored.
    pub fn set_bank(&mut self, bank: Angle) {
        if self.is_gimbal_locked() {
            log::trace!(
                "EulerAngles::set_bank: ignoring bank {} at gimbal-locked pitch {}",
                bank,
                self.pitch
            );
            return;
        }
        self.bank = bank;
    }

    /// `|pitch| ≈ π/2`.
    pub fn is_gimbal_locked(&self) -> bool {
        is_locked_pitch(self.pitch)
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical_violations().is_empty()
    }

    /// Components outside their canonical range, in heading, pitch, bank order.
    pub fn canonical_violations(&self) -> Vec<CanonicalViolation> {
        let mut out = Vec::new();
        if !in_pi_range(self.heading) {
            out.push(CanonicalViolation::Heading);
        }
        if !in_half_pi_range(self.pitch) {
            out.push(CanonicalViolation::Pitch);
        }
        if !in_pi_range(self.bank) {
            out.push(CanonicalViolation::Bank);
        }
        out
    }

    /// The canonical triple for the same orientation.
    ///
    /// Pitch is wrapped and, if beyond ±π/2, reflected back with heading and
    /// bank each turned by π. At gimbal lock the bank is folded into heading
    /// (subtracted at +π/2, added at -π/2). Heading and bank end up in (-π, π].
    pub fn canonical(&self) -> Self {
        let mut heading = self.heading;
        let mut pitch = Angle::from_radians(wrap_pm_pi(self.pitch.radians()));
        let mut bank = self.bank;

        if pitch < -Angle::HALF_PI {
            pitch = -Angle::PI - pitch;
            heading += Angle::PI;
            bank += Angle::PI;
        } else if pitch > Angle::HALF_PI {
            pitch = Angle::PI - pitch;
            heading += Angle::PI;
            bank += Angle::PI;
        }

        if is_locked_pitch(pitch) {
            if pitch > Angle::ZERO {
                heading -= bank;
            } else {
                heading += bank;
            }
            bank = Angle::ZERO;
        } else {
            bank = wrap_canonical(bank);
        }

        Self::new(wrap_canonical(heading), pitch, bank)
    }
}

impl From<[Angle; 3]> for EulerAngles {
    fn from([heading, pitch, bank]: [Angle; 3]) -> Self {
        Self::new(heading, pitch, bank)
    }
}

impl From<EulerAngles> for [Angle; 3] {
    fn from(e: EulerAngles) -> Self {
        [e.heading, e.pitch, e.bank]
    }
}

/// `(h, p, b)` in whole degrees.
impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.heading.whole_degrees(),
            self.pitch.whole_degrees(),
            self.bank.whole_degrees()
        )
    }
}
