//! Conversions between orientation and direction representations.
//!
//! | From \ To | Matrix | Euler | Quaternion | Axis-angle |
//! |-----------|--------|-------|------------|------------|
//! | Matrix | | [`matrix_to_euler_angles`] | [`matrix_to_quaternion`] | |
//! | Euler | [`euler_angles_to_matrix`] | | [`euler_angles_to_quaternion`] | |
//! | Quaternion | [`quaternion_to_matrix`] | [`quaternion_to_euler_angles`] | | [`quaternion_to_axis_angle`] |
//! | Axis-angle | | | [`axis_angle_to_quaternion`] | |
//!
//! Directions convert between Cartesian vectors and each polar form through
//! the `*_to_vector` / `vector_to_*` pairs, alongside the classic to
//! heading/pitch bridge [`classic_to_polar_vector3`] and the angle-between
//! helpers.
//!
//! All matrices act on row vectors (`v · M`), like the
//! [`Matrix::rotation_x`](orient_core::Matrix::rotation_x) family. The Euler
//! sequence applies bank about Z, then pitch about X, then heading about Y.

mod polar;
mod rotation;

pub use self::polar::{
    angle_between, angle_between_2d, classic_to_polar_vector3, classic_to_vector,
    cylindrical_to_vector, polar_vector2_to_vector, polar_vector3_to_vector, vector_to_classic,
    vector_to_cylindrical, vector_to_polar_vector2, vector_to_polar_vector3,
};
pub use self::rotation::{
    axis_angle_to_quaternion, euler_angles_to_matrix, euler_angles_to_quaternion,
    matrix_to_euler_angles, matrix_to_quaternion, quaternion_to_axis_angle,
    quaternion_to_euler_angles, quaternion_to_matrix,
};
