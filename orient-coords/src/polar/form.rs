use super::{
    ClassicPolarVector3, PolarCoordinates, PolarCylindricalVector3, PolarVector2, PolarVector3,
};
use crate::convert;
use orient_core::{Scalar, Vector3};
use std::fmt;

/// Any of the four polar forms, for code that handles them uniformly.
///
/// ```
/// use orient_coords::polar::{PolarForm, PolarVector2};
/// use orient_core::{Angle, Vector3};
///
/// let form = PolarForm::from(PolarVector2::new(-1.0, Angle::ZERO));
/// let v = form.canonical().to_cartesian();
/// assert!(v.approx_eq_within(&Vector3::new([-1.0, 0.0, 0.0]), 1e-15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolarForm<T: Scalar = f64> {
    Polar2(PolarVector2<T>),
    Cylindrical(PolarCylindricalVector3<T>),
    Classic(ClassicPolarVector3<T>),
    HeadingPitch(PolarVector3<T>),
}

impl<T: Scalar> PolarForm<T> {
    /// Canonical form of the wrapped value; the variant is preserved.
    pub fn canonical(&self) -> Self {
        match self {
            Self::Polar2(p) => Self::Polar2(p.canonical()),
            Self::Cylindrical(p) => Self::Cylindrical(p.canonical()),
            Self::Classic(p) => Self::Classic(p.canonical()),
            Self::HeadingPitch(p) => Self::HeadingPitch(p.canonical()),
        }
    }

    /// Cartesian vector. A [`PolarVector2`] lies in the XY plane (z = 0).
    pub fn to_cartesian(&self) -> Vector3<T> {
        match self {
            Self::Polar2(p) => convert::polar_vector2_to_vector(p).extend(T::ZERO),
            Self::Cylindrical(p) => convert::cylindrical_to_vector(p),
            Self::Classic(p) => convert::classic_to_vector(p),
            Self::HeadingPitch(p) => convert::polar_vector3_to_vector(p),
        }
    }
}

impl<T: Scalar> PolarCoordinates<T> for PolarForm<T> {
    fn length(&self) -> T {
        match self {
            Self::Polar2(p) => p.length(),
            Self::Cylindrical(p) => p.length(),
            Self::Classic(p) => p.length(),
            Self::HeadingPitch(p) => p.length(),
        }
    }

    fn set_length(&mut self, length: T) {
        match self {
            Self::Polar2(p) => p.set_length(length),
            Self::Cylindrical(p) => p.set_length(length),
            Self::Classic(p) => p.set_length(length),
            Self::HeadingPitch(p) => p.set_length(length),
        }
    }
}

impl<T: Scalar> From<PolarVector2<T>> for PolarForm<T> {
    fn from(p: PolarVector2<T>) -> Self {
        Self::Polar2(p)
    }
}

impl<T: Scalar> From<PolarCylindricalVector3<T>> for PolarForm<T> {
    fn from(p: PolarCylindricalVector3<T>) -> Self {
        Self::Cylindrical(p)
    }
}

impl<T: Scalar> From<ClassicPolarVector3<T>> for PolarForm<T> {
    fn from(p: ClassicPolarVector3<T>) -> Self {
        Self::Classic(p)
    }
}

impl<T: Scalar> From<PolarVector3<T>> for PolarForm<T> {
    fn from(p: PolarVector3<T>) -> Self {
        Self::HeadingPitch(p)
    }
}

impl<T: Scalar> fmt::Display for PolarForm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polar2(p) => fmt::Display::fmt(p, f),
            Self::Cylindrical(p) => fmt::Display::fmt(p, f),
            Self::Classic(p) => fmt::Display::fmt(p, f),
            Self::HeadingPitch(p) => fmt::Display::fmt(p, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orient_core::Angle;

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d)
    }

    #[test]
    fn test_canonical_keeps_variant() {
        let forms: [PolarForm; 4] = [
            PolarVector2::new(-1.0, deg(10.0)).into(),
            PolarCylindricalVector3::new(-1.0, deg(10.0), 3.0).into(),
            ClassicPolarVector3::new(-1.0, deg(10.0), deg(20.0)).into(),
            PolarVector3::new(-1.0, deg(10.0), deg(20.0)).into(),
        ];
        for form in forms {
            let c = form.canonical();
            assert_eq!(std::mem::discriminant(&form), std::mem::discriminant(&c));
            assert_eq!(c.length(), 1.0);
        }
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let p = ClassicPolarVector3::new(2.0, deg(400.0), deg(-100.0));
        assert_eq!(PolarForm::from(p).canonical(), PolarForm::from(p.canonical()));
    }

    #[test]
    fn test_to_cartesian() {
        let up = PolarForm::from(ClassicPolarVector3::new(2.0, deg(0.0), deg(0.0)));
        assert!(up.to_cartesian().approx_eq_within(&Vector3::new([0.0, 0.0, 2.0]), 1e-15));

        let cyl = PolarForm::from(PolarCylindricalVector3::new(1.0, deg(90.0), 5.0));
        assert!(cyl.to_cartesian().approx_eq_within(&Vector3::new([0.0, 1.0, 5.0]), 1e-15));

        let ahead = PolarForm::from(PolarVector3::new(1.0, deg(0.0), deg(0.0)));
        assert!(ahead.to_cartesian().approx_eq_within(&Vector3::new([0.0, 0.0, 1.0]), 1e-15));
    }

    #[test]
    fn test_set_length_reaches_inner_value() {
        let mut form = PolarForm::from(PolarVector3::new(1.0, deg(5.0), deg(5.0)));
        form.set_length(7.0);
        assert_eq!(form.length(), 7.0);
        assert!(!form.is_zero_length());
        form.set_length(0.0);
        assert!(form.is_zero_length());
    }

    #[test]
    fn test_display_delegates() {
        let form = PolarForm::from(PolarCylindricalVector3::new(1.0, deg(90.0), 2.0));
        assert_eq!(form.to_string(), "(1.00, 90, 2.00)");
    }
}
