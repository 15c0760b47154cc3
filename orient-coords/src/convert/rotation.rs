use crate::{AxisAngle, CoordResult, EulerAngles, Quaternion};
use orient_core::math::{clamp_unit, is_float_equal_or_larger};
use orient_core::{Angle, Matrix3, Scalar, Vector3};

/// Rotation matrix of a unit quaternion.
///
/// ```text
/// | 1-2y²-2z²   2xy+2wz    2xz-2wy  |
/// | 2xy-2wz    1-2x²-2z²   2yz+2wx  |
/// | 2xz+2wy     2yz-2wx   1-2x²-2y² |
/// ```
pub fn quaternion_to_matrix(q: &Quaternion) -> Matrix3<f64> {
    let Quaternion { w, x, y, z } = *q;
    Matrix3::from_rows([
        [
            1.0 - 2.0 * (y * y) - 2.0 * (z * z),
            2.0 * (x * y) + 2.0 * (w * z),
            2.0 * (x * z) - 2.0 * (w * y),
        ],
        [
            2.0 * (x * y) - 2.0 * (w * z),
            1.0 - 2.0 * (x * x) - 2.0 * (z * z),
            2.0 * (y * z) + 2.0 * (w * x),
        ],
        [
            2.0 * (x * z) + 2.0 * (w * y),
            2.0 * (y * z) - 2.0 * (w * x),
            1.0 - 2.0 * (x * x) - 2.0 * (y * y),
        ],
    ])
}

/// Euler angles of a rotation matrix.
///
/// `sin(pitch) = -m[2][1]`, clamped to [-1, 1]. The gimbal branch is taken
/// when the sine is 1 within epsilon, the same test
/// [`quaternion_to_euler_angles`] uses, or when the pitch is within epsilon
/// of -π/2, where [`EulerAngles`] locks. Pitch is then exactly ±π/2 and
/// heading comes from the first row, with bank zero: the third row and column
/// hold only rounding noise there.
pub fn matrix_to_euler_angles<T: Scalar>(m: &Matrix3<T>) -> EulerAngles {
    let m = m.to_f64();
    let sin_pitch = clamp_unit(-m[(2, 1)]);
    let pitch = Angle::from_radians(libm::asin(sin_pitch));

    let locked_up = is_float_equal_or_larger(sin_pitch, 1.0);
    if locked_up || pitch == -Angle::HALF_PI {
        log::trace!("matrix_to_euler_angles: gimbal lock, bank folded into heading");
        let pitch = if locked_up {
            Angle::HALF_PI
        } else {
            -Angle::HALF_PI
        };
        let heading = libm::atan2(-m[(0, 2)], m[(0, 0)]);
        return EulerAngles::new(Angle::from_radians(heading), pitch, Angle::ZERO);
    }

    let heading = libm::atan2(m[(2, 0)], m[(2, 2)]);
    let bank = libm::atan2(m[(0, 1)], m[(1, 1)]);
    EulerAngles::new(Angle::from_radians(heading), pitch, Angle::from_radians(bank))
}

/// Euler angles of a unit quaternion.
///
/// Only a pitch at +π/2 (within epsilon) takes the gimbal branch. Near -π/2
/// the general formulas run with a clamped `asin`, and [`EulerAngles::new`]
/// then discards the bank.
pub fn quaternion_to_euler_angles(q: &Quaternion) -> EulerAngles {
    let Quaternion { w, x, y, z } = *q;
    let sin_pitch = -2.0 * (y * z - w * x);

    if is_float_equal_or_larger(sin_pitch, 1.0) {
        log::trace!("quaternion_to_euler_angles: gimbal lock at +pi/2");
        let heading = libm::atan2(-x * z + w * y, 0.5 - y * y - z * z);
        return EulerAngles::new(Angle::from_radians(heading), Angle::HALF_PI, Angle::ZERO);
    }

    let pitch = libm::asin(clamp_unit(sin_pitch));
    let heading = libm::atan2(x * z + w * y, 0.5 - x * x - y * y);
    let bank = libm::atan2(x * y + w * z, 0.5 - x * x - z * z);
    EulerAngles::new(
        Angle::from_radians(heading),
        Angle::from_radians(pitch),
        Angle::from_radians(bank),
    )
}

/// `Rz(bank) · Rx(pitch) · Ry(heading)`: with row vectors bank acts first.
pub fn euler_angles_to_matrix(e: &EulerAngles) -> Matrix3<f64> {
    Matrix3::rotation_z(e.bank()) * Matrix3::rotation_x(e.pitch()) * Matrix3::rotation_y(e.heading())
}

/// Quaternion of an Euler triple: heading ∘ pitch ∘ bank.
pub fn euler_angles_to_quaternion(e: &EulerAngles) -> Quaternion {
    let (sh, ch) = (e.heading() * 0.5).sin_cos();
    let (sp, cp) = (e.pitch() * 0.5).sin_cos();
    let (sb, cb) = (e.bank() * 0.5).sin_cos();

    Quaternion::new(
        ch * cp * cb + sh * sp * sb,
        ch * sp * cb + sh * cp * sb,
        sh * cp * cb - ch * sp * sb,
        ch * cp * sb - sh * sp * cb,
    )
}

/// Quaternion of a rotation matrix.
///
/// Recovers the largest of `|w|, |x|, |y|, |z|` from the diagonal first and the
/// other three from off-diagonal sums and differences, which keeps the division
/// well conditioned.
pub fn matrix_to_quaternion<T: Scalar>(m: &Matrix3<T>) -> Quaternion {
    let m = m.to_f64();
    let (m11, m12, m13) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (m21, m22, m23) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (m31, m32, m33) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

    let candidates = [
        m11 + m22 + m33,
        m11 - m22 - m33,
        m22 - m11 - m33,
        m33 - m11 - m22,
    ];
    let mut biggest = 0;
    for (i, value) in candidates.iter().enumerate().skip(1) {
        if *value > candidates[biggest] {
            biggest = i;
        }
    }

    let big = libm::sqrt(candidates[biggest] + 1.0) * 0.5;
    let mult = 0.25 / big;

    match biggest {
        0 => Quaternion::new(
            big,
            (m23 - m32) * mult,
            (m31 - m13) * mult,
            (m12 - m21) * mult,
        ),
        1 => Quaternion::new(
            (m23 - m32) * mult,
            big,
            (m12 + m21) * mult,
            (m31 + m13) * mult,
        ),
        2 => Quaternion::new(
            (m31 - m13) * mult,
            (m12 + m21) * mult,
            big,
            (m23 + m32) * mult,
        ),
        _ => Quaternion::new(
            (m12 - m21) * mult,
            (m31 + m13) * mult,
            (m23 + m32) * mult,
            big,
        ),
    }
}

/// Unit quaternion rotating by `angle` about `axis`.
///
/// The axis is normalized in `f64` first; a zero axis is an error.
pub fn axis_angle_to_quaternion<T: Scalar>(axis_angle: &AxisAngle<T>) -> CoordResult<Quaternion> {
    let axis = axis_angle.axis().to_f64().normalized()?;
    let (s, c) = (axis_angle.angle() * 0.5).sin_cos();
    Ok(Quaternion::from_parts(c, axis * s))
}

/// Axis and angle of a unit quaternion, angle in [0, 2π].
///
/// Identity, and any rotation whose axis is numerically undefined, reports the
/// +X axis.
pub fn quaternion_to_axis_angle(q: &Quaternion) -> AxisAngle<f64> {
    let x_axis = Vector3::new([1.0, 0.0, 0.0]);
    if q.is_identity() {
        return AxisAngle::new(x_axis, Angle::ZERO);
    }

    let w = clamp_unit(q.w);
    let angle = Angle::from_radians(2.0 * libm::acos(w));
    let s = libm::sqrt(1.0 - w * w);
    match q.vector_part().normalized() {
        Ok(axis) if s > 0.0 => AxisAngle::new(axis, angle),
        _ => AxisAngle::new(x_axis, angle),
    }
}
