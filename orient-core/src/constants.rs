//! Numeric constants shared by the angle, vector and matrix types.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Absolute tolerance for angle equality and the other "≈" tests on scalars.
///
/// This is the single-precision machine epsilon. The tolerance is absolute,
/// not relative, so it is only meaningful for values near unit scale.
pub const EPSILON: f64 = f32::EPSILON as f64;
