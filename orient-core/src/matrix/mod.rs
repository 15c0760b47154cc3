//! Fixed-size linear algebra.
//!
//! - [`Vector<T, N>`]: `N`-component vector, [`Vector2`]/[`Vector3`] aliases
//! - [`Matrix<T, N>`]: `N`×`N` row-major matrix, [`Matrix2`]/[`Matrix3`]/[`Matrix4`] aliases
//! - [`set_rotation_x`], [`set_rotation_y`], [`set_rotation_z`]: axis rotation writers

mod rotation;
mod square;
mod vector;

pub use rotation::{set_rotation_x, set_rotation_y, set_rotation_z};
pub use square::{Matrix, Matrix2, Matrix3, Matrix4};
pub use vector::{Vector, Vector2, Vector3};
