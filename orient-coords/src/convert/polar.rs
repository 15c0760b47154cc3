use crate::constants::{heading_pitch_pole_limit, THREE_HALF_PI};
use crate::polar::{
    ClassicPolarVector3, PolarCoordinates, PolarCylindricalVector3, PolarVector2, PolarVector3,
};
use orient_core::math::clamp_unit;
use orient_core::{Angle, Scalar, Vector2, Vector3};

/// `x = r·cos a`, `y = r·sin a`.
pub fn polar_vector2_to_vector<T: Scalar>(p: &PolarVector2<T>) -> Vector2<T> {
    let r = p.length().to_f64();
    let (s, c) = p.angle().sin_cos();
    Vector2::new([T::from_f64(r * c), T::from_f64(r * s)])
}

/// `r = hypot(x, y)`, `a = atan2(y, x)`.
pub fn vector_to_polar_vector2<T: Scalar>(v: &Vector2<T>) -> PolarVector2<T> {
    let (x, y) = (v.x().to_f64(), v.y().to_f64());
    PolarVector2::new(
        T::from_f64(libm::hypot(x, y)),
        Angle::from_radians(libm::atan2(y, x)),
    )
}

pub fn cylindrical_to_vector<T: Scalar>(p: &PolarCylindricalVector3<T>) -> Vector3<T> {
    polar_vector2_to_vector(&p.polar()).extend(p.height())
}

pub fn vector_to_cylindrical<T: Scalar>(v: &Vector3<T>) -> PolarCylindricalVector3<T> {
    PolarCylindricalVector3::from_polar(vector_to_polar_vector2(&v.truncate()), v.z())
}

/// Physics convention: `x = l·sin v·cos h`, `y = l·sin v·sin h`, `z = l·cos v`.
pub fn classic_to_vector<T: Scalar>(p: &ClassicPolarVector3<T>) -> Vector3<T> {
    let l = p.length().to_f64();
    let (sh, ch) = p.horizontal().sin_cos();
    let (sv, cv) = p.vertical().sin_cos();
    Vector3::new([
        T::from_f64(l * sv * ch),
        T::from_f64(l * sv * sh),
        T::from_f64(l * cv),
    ])
}

/// Inverse of [`classic_to_vector`] with vertical in [0, π]. A zero vector maps
/// to a zero-length value with both angles zero.
pub fn vector_to_classic<T: Scalar>(v: &Vector3<T>) -> ClassicPolarVector3<T> {
    let l = v.length();
    if l == 0.0 {
        return ClassicPolarVector3::new(T::ZERO, Angle::ZERO, Angle::ZERO);
    }
    let v = v.to_f64();
    ClassicPolarVector3::new(
        T::from_f64(l),
        Angle::from_radians(libm::atan2(v.y(), v.x())),
        Angle::from_radians(libm::acos(clamp_unit(v.z() / l))),
    )
}

/// Aviation convention: `x = l·cos p·sin h`, `y = -l·sin p`, `z = l·cos p·cos h`.
pub fn polar_vector3_to_vector<T: Scalar>(p: &PolarVector3<T>) -> Vector3<T> {
    let l = p.length().to_f64();
    let (sh, ch) = p.heading().sin_cos();
    let (sp, cp) = p.pitch().sin_cos();
    Vector3::new([
        T::from_f64(l * cp * sh),
        T::from_f64(-l * sp),
        T::from_f64(l * cp * ch),
    ])
}

/// Inverse of [`polar_vector3_to_vector`].
///
/// `pitch = asin(-y / l)`. Heading is `atan2(x, z)` away from the poles and
/// zero within [`HEADING_PITCH_POLE_FACTOR`](crate::constants::HEADING_PITCH_POLE_FACTOR)
/// of ±π/2.
pub fn vector_to_polar_vector3<T: Scalar>(v: &Vector3<T>) -> PolarVector3<T> {
    let l = v.length();
    if l == 0.0 {
        return PolarVector3::new(T::ZERO, Angle::ZERO, Angle::ZERO);
    }
    let v = v.to_f64();
    let pitch = Angle::from_radians(libm::asin(clamp_unit(-v.y() / l)));
    let heading = if pitch.abs() < heading_pitch_pole_limit() {
        Angle::from_radians(libm::atan2(v.x(), v.z()))
    } else {
        Angle::ZERO
    };
    PolarVector3::new(T::from_f64(l), heading, pitch)
}

/// Re-expresses a classic polar vector in the heading/pitch convention:
/// `heading = -horizontal - 270°`, `pitch = vertical - 90°`.
///
/// The two conventions put their poles on different axes, so the Cartesian
/// images differ by a swap of Y and Z:
///
/// ```
/// use orient_coords::convert::{classic_to_polar_vector3, classic_to_vector, polar_vector3_to_vector};
/// use orient_coords::polar::ClassicPolarVector3;
/// use orient_core::{Angle, Vector3};
///
/// let c = ClassicPolarVector3::new(1.0, Angle::from_degrees(30), Angle::from_degrees(60));
/// let a = classic_to_vector(&c);
/// let b = polar_vector3_to_vector(&classic_to_polar_vector3(&c));
/// assert!(b.approx_eq_within(&Vector3::new([a.x(), a.z(), a.y()]), 1e-12));
/// ```
///
/// The result is not canonicalized.
pub fn classic_to_polar_vector3<T: Scalar>(p: &ClassicPolarVector3<T>) -> PolarVector3<T> {
    PolarVector3::new(
        p.length(),
        -p.horizontal() - THREE_HALF_PI,
        p.vertical() - Angle::HALF_PI,
    )
}

/// Unsigned angle between two 3D vectors, in [0, π].
pub fn angle_between<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Angle {
    let (a, b) = (a.to_f64(), b.to_f64());
    Angle::from_radians(libm::atan2(a.cross(&b).length(), a.dot(&b)))
}

/// Signed angle from `a` to `b` in the plane, positive counterclockwise.
pub fn angle_between_2d<T: Scalar>(a: &Vector2<T>, b: &Vector2<T>) -> Angle {
    let (a, b) = (a.to_f64(), b.to_f64());
    let cross = a.x() * b.y() - a.y() * b.x();
    Angle::from_radians(libm::atan2(cross, a.dot(&b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orient_core::test_helpers::assert_angle_close;

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d)
    }

    #[test]
    fn test_polar_vector2_axes() {
        let v = polar_vector2_to_vector(&PolarVector2::new(2.0, deg(90.0)));
        assert!(v.approx_eq_within(&Vector2::new([0.0, 2.0]), 1e-15));

        let p = vector_to_polar_vector2(&Vector2::new([-3.0, 0.0]));
        assert_eq!(p.length(), 3.0);
        assert_eq!(p.angle(), Angle::PI);
    }

    #[test]
    fn test_integer_polar_vector2() {
        let p = vector_to_polar_vector2(&Vector2::new([3, 4]));
        assert_eq!(p.length(), 5);
        let v = polar_vector2_to_vector(&PolarVector2::new(5, deg(90.0)));
        assert_eq!(v, Vector2::new([0, 5]));
    }

    #[test]
    fn test_cylindrical() {
        let p = vector_to_cylindrical(&Vector3::new([0.0, -2.0, 7.0]));
        assert_eq!(p.length(), 2.0);
        assert_eq!(p.angle(), deg(-90.0));
        assert_eq!(p.height(), 7.0);
        let v = cylindrical_to_vector(&p);
        assert!(v.approx_eq_within(&Vector3::new([0.0, -2.0, 7.0]), 1e-15));
    }

    #[test]
    fn test_classic_axes() {
        let up = classic_to_vector(&ClassicPolarVector3::new(1.0, deg(0.0), deg(0.0)));
        assert!(up.approx_eq_within(&Vector3::new([0.0, 0.0, 1.0]), 1e-15));

        let y = classic_to_vector(&ClassicPolarVector3::new(1.0, deg(90.0), deg(90.0)));
        assert!(y.approx_eq_within(&Vector3::new([0.0, 1.0, 0.0]), 1e-15));

        let p = vector_to_classic(&Vector3::new([0.0, 0.0, -4.0]));
        assert_eq!(p.length(), 4.0);
        assert_eq!(p.vertical(), Angle::PI);
    }

    #[test]
    fn test_zero_vectors() {
        let c = vector_to_classic(&Vector3::<f64>::zero());
        assert!(c.is_zero_length());
        assert_eq!(c.vertical(), Angle::ZERO);

        let h = vector_to_polar_vector3(&Vector3::<f64>::zero());
        assert!(h.is_zero_length());
        assert_eq!(h.heading(), Angle::ZERO);
        assert_eq!(h.pitch(), Angle::ZERO);
    }

    #[test]
    fn test_heading_pitch_axes() {
        let ahead = polar_vector3_to_vector(&PolarVector3::new(1.0, deg(0.0), deg(0.0)));
        assert!(ahead.approx_eq_within(&Vector3::new([0.0, 0.0, 1.0]), 1e-15));

        let right = polar_vector3_to_vector(&PolarVector3::new(1.0, deg(90.0), deg(0.0)));
        assert!(right.approx_eq_within(&Vector3::new([1.0, 0.0, 0.0]), 1e-15));

        let down = polar_vector3_to_vector(&PolarVector3::new(1.0, deg(0.0), deg(90.0)));
        assert!(down.approx_eq_within(&Vector3::new([0.0, -1.0, 0.0]), 1e-15));
    }

    #[test]
    fn test_vector_to_polar_vector3_pole_zeroes_heading() {
        let p = vector_to_polar_vector3(&Vector3::new([1e-6, -3.0, 1e-6]));
        assert_eq!(p.heading(), Angle::ZERO);
        assert_angle_close(p.pitch(), Angle::HALF_PI, 1e-6);

        let q = vector_to_polar_vector3(&Vector3::new([1.0, -1.0, 1.0]));
        assert_angle_close(q.heading(), deg(45.0), 1e-12);
        assert!(q.pitch() > Angle::ZERO);
    }

    #[test]
    fn test_classic_bridge() {
        let hp = classic_to_polar_vector3(&ClassicPolarVector3::new(2.0, deg(0.0), deg(90.0)));
        assert_eq!(hp.length(), 2.0);
        assert_angle_close(hp.heading(), deg(90.0), 1e-12);
        assert_angle_close(hp.pitch(), deg(0.0), 1e-12);
    }

    #[test]
    fn test_angle_between() {
        let x = Vector3::new([1.0, 0.0, 0.0]);
        let y = Vector3::new([0.0, 3.0, 0.0]);
        assert_angle_close(angle_between(&x, &y), deg(90.0), 1e-15);
        assert_angle_close(angle_between(&x, &-x), deg(180.0), 1e-15);
        assert_eq!(angle_between(&x, &x), Angle::ZERO);
    }

    #[test]
    fn test_angle_between_2d_is_signed() {
        let a = Vector2::new([1.0, 0.0]);
        let b = Vector2::new([1.0, 1.0]);
        assert_angle_close(angle_between_2d(&a, &b), deg(45.0), 1e-15);
        assert_angle_close(angle_between_2d(&b, &a), deg(-45.0), 1e-15);
    }
}
