//! Single-axis rotation blocks.
//!
//! The writers overwrite the 3×3 rotation sub-block of a matrix and leave every
//! other element alone, so they work on a 4×4 transform as well as on a 3×3
//! rotation. For `N <= 2` there is no such sub-block and they do nothing.
//!
//! Rotations are active and act on row vectors (`v · M`). A positive angle turns
//! counterclockwise when looking down the axis toward the origin:
//!
//! ```text
//! Rx(a) = | 1    0     0   |    Ry(a) = | cos a  0  -sin a |    Rz(a) = |  cos a  sin a  0 |
//!         | 0  cos a  sin a|            |   0    1    0    |            | -sin a  cos a  0 |
//!         | 0 -sin a  cos a|            | sin a  0   cos a |            |   0      0    1 |
//! ```
//!
//! ```
//! use orient_core::{Angle, Matrix3, Vector3};
//!
//! let m = Matrix3::rotation_z(Angle::from_degrees(90));
//! let v = Vector3::new([1.0, 0.0, 0.0]) * m;
//! assert!(v.approx_eq_within(&Vector3::new([0.0, 1.0, 0.0]), 1e-15));
//! ```
//!
//! Integer matrices receive `sin`/`cos` truncated toward zero, which is only
//! exact for multiples of 90°.

use super::square::Matrix;
use crate::angle::Angle;
use crate::math::Scalar;

fn write_block<T: Scalar, const N: usize>(m: &mut Matrix<T, N>, block: [[f64; 3]; 3]) {
    if N <= 2 {
        return;
    }
    for (r, row) in block.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            m[(r, c)] = T::from_f64(*v);
        }
    }
}

/// Writes a rotation about X into the upper-left 3×3 block.
pub fn set_rotation_x<T: Scalar, const N: usize>(m: &mut Matrix<T, N>, angle: Angle) {
    let (s, c) = angle.sin_cos();
    write_block(m, [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]]);
}

/// Writes a rotation about Y into the upper-left 3×3 block.
pub fn set_rotation_y<T: Scalar, const N: usize>(m: &mut Matrix<T, N>, angle: Angle) {
    let (s, c) = angle.sin_cos();
    write_block(m, [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]]);
}

/// Writes a rotation about Z into the upper-left 3×3 block.
pub fn set_rotation_z<T: Scalar, const N: usize>(m: &mut Matrix<T, N>, angle: Angle) {
    let (s, c) = angle.sin_cos();
    write_block(m, [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]]);
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Identity with a rotation about X written into it.
    pub fn rotation_x(angle: Angle) -> Self {
        let mut m = Self::identity();
        set_rotation_x(&mut m, angle);
        m
    }

    /// Identity with a rotation about Y written into it.
    pub fn rotation_y(angle: Angle) -> Self {
        let mut m = Self::identity();
        set_rotation_y(&mut m, angle);
        m
    }

    /// Identity with a rotation about Z written into it.
    pub fn rotation_z(angle: Angle) -> Self {
        let mut m = Self::identity();
        set_rotation_z(&mut m, angle);
        m
    }
}
