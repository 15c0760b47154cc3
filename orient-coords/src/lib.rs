pub mod axis_angle;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod euler;
pub mod polar;
pub mod quaternion;

pub use axis_angle::AxisAngle;
pub use errors::{CoordError, CoordResult};
pub use euler::{CanonicalViolation, EulerAngles};
pub use orient_core::Angle;
pub use quaternion::Quaternion;

pub use polar::{
    ClassicPolarVector3, PolarCoordinates, PolarCylindricalVector3, PolarForm, PolarVector2,
    PolarVector3,
};

pub use orient_core::{Matrix3, Vector2, Vector3};
