//! Numeric building blocks for orientation math.
//!
//! `orient-core` holds the pieces every orientation representation is built from:
//! an angle type with tolerant comparison, fixed-size vectors and square
//! matrices generic over their element type, and the single-axis rotation
//! writers. The representations themselves (Euler angles, quaternions,
//! polar forms) live in `orient-coords`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], arithmetic, floor-based wrapping, `Display` |
//! | [`matrix`] | [`Vector`], [`Matrix`], axis rotation writers |
//! | [`math`] | [`Scalar`] element trait, float tolerance helpers |
//! | [`constants`] | π multiples, degree conversion, [`EPSILON`](constants::EPSILON) |
//! | [`errors`] | [`OrientError`] and [`OrientResult`] |
//!
//! # Re-exports
//!
//! ```
//! use orient_core::{Angle, Matrix, Matrix3, Scalar, Vector, Vector3};
//! use orient_core::{MathErrorKind, OrientError, OrientResult};
//! ```
//!
//! # Conventions
//!
//! - **Radians internally**: [`Angle`] stores radians; degrees appear only at
//!   construction and in `Display`.
//!
//! - **Row vectors**: vectors multiply matrices from the left (`v * M`). A
//!   rotation matrix composed as `A * B` applies `A` first.
//!
//! - **Absolute tolerance**: angle and scalar "≈" tests use a fixed
//!   [`EPSILON`](constants::EPSILON), not a relative one.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use angle::Angle;
pub use errors::{MathErrorKind, OrientError, OrientResult};
pub use math::Scalar;
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4, Vector, Vector2, Vector3};

pub mod test_helpers;
