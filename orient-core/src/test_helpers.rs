//! Assertions shared by the unit and integration tests of both crates.
//!
//! Tolerances are absolute unless the name says ULP. Angles compare on the
//! circle, so `179.9°` and `-179.9°` are 0.2° apart.

use crate::angle::{wrap_pm_pi, Angle};
use crate::math::Scalar;
use crate::matrix::{Matrix, Vector};

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Distance between two doubles in units in the last place.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {}", ctx);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {}, got {} (diff {:e})",
        expected,
        tolerance,
        actual,
        (actual - expected).abs()
    );
}

/// Compares two angles modulo 2π, `tolerance` in radians.
#[track_caller]
pub fn assert_angle_close(actual: Angle, expected: Angle, tolerance: f64) {
    let diff = wrap_pm_pi(actual.radians() - expected.radians()).abs();
    assert!(
        diff <= tolerance,
        "expected {:.9} rad ({}) within {}, got {:.9} rad ({})",
        expected.radians(),
        expected,
        tolerance,
        actual.radians(),
        actual
    );
}

#[track_caller]
pub fn assert_vector_close<T: Scalar, const N: usize>(
    actual: &Vector<T, N>,
    expected: &Vector<T, N>,
    tolerance: f64,
) {
    let d = actual.max_difference(expected);
    assert!(
        d <= tolerance,
        "vectors differ by {:e} (tolerance {:e}):\n  actual   {}\n  expected {}",
        d,
        tolerance,
        actual,
        expected
    );
}

#[track_caller]
pub fn assert_matrix_close<T: Scalar, const N: usize>(
    actual: &Matrix<T, N>,
    expected: &Matrix<T, N>,
    tolerance: f64,
) {
    let d = actual.max_difference(expected);
    assert!(
        d <= tolerance,
        "matrices differ by {:e} (tolerance {:e}):\nactual:\n{}expected:\n{}",
        d,
        tolerance,
        actual,
        expected
    );
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
