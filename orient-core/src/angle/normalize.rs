//! Floor-based angle reduction.
//!
//! Every canonicalization in the workspace reduces angles the same way:
//!
//! | Function | Range | Used for |
//! |----------|-------|----------|
//! | [`reduce_two_pi`] | [0, 2π) | pitch/vertical folding |
//! | [`wrap_pm_pi`] | [-π, π) | heading, bank, polar angles |
//!
//! # Floor vs. remainder
//!
//! The reduction subtracts `floor(x / 2π) · 2π`. Unlike `%` (or `fmod`), the
//! result never keeps the sign of a negative dividend, so a single formula covers
//! both directions:
//!
//! ```
//! use orient_core::angle::{reduce_two_pi, wrap_pm_pi};
//! use std::f64::consts::PI;
//!
//! assert!((reduce_two_pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
//! assert!((wrap_pm_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
//! ```
//!
//! `wrap_pm_pi` maps +π to -π. Callers that treat +π as canonical only wrap
//! angles whose magnitude exceeds π.

use crate::constants::{PI, TWOPI};

/// Reduces an angle in radians to [0, 2π).
#[inline]
pub fn reduce_two_pi(x: f64) -> f64 {
    x - libm::floor(x / TWOPI) * TWOPI
}

/// Wraps an angle in radians to [-π, π): shift by +π, reduce, shift back.
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    reduce_two_pi(x + PI) - PI
}
