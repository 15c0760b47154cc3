use approx::assert_abs_diff_eq;
use orient_coords::convert::{
    axis_angle_to_quaternion, classic_to_polar_vector3, classic_to_vector,
    cylindrical_to_vector, euler_angles_to_matrix, euler_angles_to_quaternion,
    matrix_to_euler_angles, matrix_to_quaternion, polar_vector2_to_vector,
    polar_vector3_to_vector, quaternion_to_euler_angles, quaternion_to_matrix,
    vector_to_classic, vector_to_cylindrical, vector_to_polar_vector2, vector_to_polar_vector3,
};
use orient_coords::polar::{
    ClassicPolarVector3, PolarCoordinates, PolarCylindricalVector3, PolarForm, PolarVector2,
    PolarVector3,
};
use orient_coords::{AxisAngle, EulerAngles, Quaternion};
use orient_core::test_helpers::{assert_angle_close, assert_matrix_close};
use orient_core::{Angle, Matrix3, Vector3};
use proptest::prelude::*;
use std::f64::consts::FRAC_1_SQRT_2;

fn deg(d: f64) -> Angle {
    Angle::from_degrees(d)
}

fn assert_euler_close(actual: &EulerAngles, expected: &EulerAngles, tolerance: f64) {
    assert_angle_close(actual.heading(), expected.heading(), tolerance);
    assert_angle_close(actual.pitch(), expected.pitch(), tolerance);
    assert_angle_close(actual.bank(), expected.bank(), tolerance);
}

// --- Scenarios ---

#[test]
fn ninety_degrees_in_radians() {
    assert_abs_diff_eq!(Angle::from_degrees(90).radians(), 1.5708, epsilon = 1e-4);
}

#[test]
fn gimbal_locked_construction_drops_bank() {
    let e = EulerAngles::from_degrees(0.0, 90.0, 45.0);
    assert!(e.is_gimbal_locked());
    assert_eq!(e.bank(), Angle::ZERO);
}

#[test]
fn negative_unit_classic_canonicalizes_onto_pole() {
    let p = ClassicPolarVector3::new(-1.0, deg(0.0), deg(0.0)).canonical();
    assert_eq!(p.length(), 1.0);
    assert_eq!(p.horizontal(), Angle::ZERO);
    assert_eq!(p.vertical(), Angle::ZERO);
}

#[test]
fn quarter_turn_about_y_matches_axis_rotation() {
    let q = axis_angle_to_quaternion(&AxisAngle::new(Vector3::new([0.0, 1.0, 0.0]), deg(90.0)))
        .unwrap();
    assert_matrix_close(
        &quaternion_to_matrix(&q),
        &Matrix3::rotation_y(deg(90.0)),
        1e-15,
    );
}

// --- Rotation representations ---

#[test]
fn quaternion_and_matrix_agree_at_positive_gimbal_lock() {
    let locked = [
        Quaternion::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0),
        Quaternion::new(0.0, 0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    ];
    for q in locked {
        let direct = quaternion_to_euler_angles(&q);
        let via_matrix = matrix_to_euler_angles(&quaternion_to_matrix(&q));
        assert!(direct.is_gimbal_locked());
        assert_euler_close(&direct, &via_matrix, 1e-12);
    }
}

#[test]
fn locked_pitch_beyond_range_folds_bank_into_heading() {
    let e = EulerAngles::from_degrees(30.0, 270.0, 20.0);
    assert!(!e.is_gimbal_locked());
    let c = e.canonical();
    assert!(c.is_gimbal_locked());
    assert_angle_close(c.heading(), deg(50.0), 1e-12);
    assert_angle_close(c.pitch(), deg(-90.0), 1e-12);
    assert_matrix_close(&euler_angles_to_matrix(&e), &euler_angles_to_matrix(&c), 1e-12);
}

#[test]
fn quaternion_composition_matches_matrix_product() {
    let a = EulerAngles::from_degrees(10.0, 20.0, 30.0);
    let b = EulerAngles::from_degrees(-50.0, 5.0, 70.0);
    let qa = euler_angles_to_quaternion(&a);
    let qb = euler_angles_to_quaternion(&b);
    // Row vectors: `ma * mb` applies `ma` first, so it pairs with `qb * qa`.
    let expected = euler_angles_to_matrix(&a) * euler_angles_to_matrix(&b);
    assert_matrix_close(&quaternion_to_matrix(&(qb * qa)), &expected, 1e-12);
}

#[test]
fn quaternion_rotate_matches_row_vector_product() {
    let e = EulerAngles::from_degrees(25.0, -40.0, 120.0);
    let v = Vector3::new([0.3, -1.2, 2.0]);
    let by_matrix = v * euler_angles_to_matrix(&e);
    let by_quaternion = euler_angles_to_quaternion(&e).rotate(&v);
    assert!(by_matrix.approx_eq_within(&by_quaternion, 1e-12));
}

#[test]
fn subtract_undoes_multiply() {
    let a = euler_angles_to_quaternion(&EulerAngles::from_degrees(15.0, 25.0, 35.0));
    let b = euler_angles_to_quaternion(&EulerAngles::from_degrees(-70.0, 10.0, 5.0));
    let back = (a * b).subtract(&b).unwrap();
    assert!(back.approx_eq_within(&a, 1e-12));
}

#[test]
fn half_power_is_half_the_angle() {
    let q = axis_angle_to_quaternion(&AxisAngle::new(Vector3::new([0.0, 0.0, 1.0]), deg(80.0)))
        .unwrap();
    let half = axis_angle_to_quaternion(&AxisAngle::new(Vector3::new([0.0, 0.0, 1.0]), deg(40.0)))
        .unwrap();
    assert!(q.exponentiate(0.5).approx_eq_within(&half, 1e-12));
}

// --- Polar forms ---

#[test]
fn polar_form_cartesian_matches_direct_conversion() {
    let c = ClassicPolarVector3::new(3.0, deg(20.0), deg(70.0));
    assert_eq!(PolarForm::from(c).to_cartesian(), classic_to_vector(&c));

    let p = PolarVector2::new(2.0, deg(-30.0));
    let v = PolarForm::from(p).to_cartesian();
    assert_eq!(v.truncate(), polar_vector2_to_vector(&p));
    assert_eq!(v.z(), 0.0);
}

#[test]
fn pole_snap_differs_between_conventions() {
    // The classic band is 1e-4 rad wide, the heading/pitch band 0.0001 * pi/2.
    let snaps_classic = |off: f64| {
        ClassicPolarVector3::new(1.0, deg(40.0), Angle::from_radians(off))
            .canonical()
            .horizontal()
            == Angle::ZERO
    };
    let snaps_heading_pitch = |off: f64| {
        PolarVector3::new(1.0, deg(40.0), Angle::HALF_PI - Angle::from_radians(off))
            .canonical()
            .heading()
            == Angle::ZERO
    };

    assert!(snaps_classic(0.00005) && snaps_heading_pitch(0.00005));
    assert!(!snaps_classic(0.00013) && snaps_heading_pitch(0.00013));
    assert!(!snaps_classic(0.001) && !snaps_heading_pitch(0.001));
}

proptest! {
    #[test]
    fn polar_vector2_round_trip(len in 0.1..100.0f64, negate: bool, a in -10.0..10.0f64) {
        let len = if negate { -len } else { len };
        let p = PolarVector2::new(len, Angle::from_radians(a));
        let c = p.canonical();
        let back = vector_to_polar_vector2(&polar_vector2_to_vector(&p));
        prop_assert!((back.length() - c.length()).abs() < 1e-9);
        assert_angle_close(back.angle(), c.angle(), 1e-9);
    }

    #[test]
    fn cylindrical_round_trip(
        len in 0.1..100.0f64,
        negate: bool,
        a in -10.0..10.0f64,
        height in -50.0..50.0f64,
    ) {
        let len = if negate { -len } else { len };
        let p = PolarCylindricalVector3::new(len, Angle::from_radians(a), height);
        let c = p.canonical();
        let back = vector_to_cylindrical(&cylindrical_to_vector(&p));
        prop_assert!((back.length() - c.length()).abs() < 1e-9);
        assert_angle_close(back.angle(), c.angle(), 1e-9);
        prop_assert_eq!(back.height(), c.height());
    }

    #[test]
    fn heading_pitch_round_trip(
        len in 0.1..100.0f64,
        negate: bool,
        h in -10.0..10.0f64,
        p in -10.0..10.0f64,
    ) {
        let len = if negate { -len } else { len };
        let v = PolarVector3::new(len, Angle::from_radians(h), Angle::from_radians(p));
        let c = v.canonical();
        prop_assume!(c.pitch().abs().radians() < 1.5);

        let back = vector_to_polar_vector3(&polar_vector3_to_vector(&v));
        prop_assert!((back.length() - c.length()).abs() < 1e-9);
        assert_angle_close(back.heading(), c.heading(), 1e-9);
        assert_angle_close(back.pitch(), c.pitch(), 1e-9);
    }

    #[test]
    fn classic_round_trip_in_upper_hemisphere(
        len in 0.1..100.0f64,
        h in -10.0..10.0f64,
        v in 0.01..std::f64::consts::FRAC_PI_2,
    ) {
        let p = ClassicPolarVector3::new(len, Angle::from_radians(h), Angle::from_radians(v));
        let c = p.canonical();
        let back = vector_to_classic(&classic_to_vector(&p));
        prop_assert!((back.length() - c.length()).abs() < 1e-9);
        assert_angle_close(back.horizontal(), c.horizontal(), 1e-9);
        assert_angle_close(back.vertical(), c.vertical(), 1e-9);
    }

    #[test]
    fn heading_pitch_canonical_keeps_direction(
        len in -100.0..100.0f64,
        h in -10.0..10.0f64,
        p in -10.0..10.0f64,
    ) {
        let v = PolarVector3::new(len, Angle::from_radians(h), Angle::from_radians(p));
        let before = polar_vector3_to_vector(&v);
        let after = polar_vector3_to_vector(&v.canonical());
        // The pole snap moves the vector by at most 2 * |len| * sin(1.6e-4).
        prop_assert!(before.approx_eq_within(&after, 4e-4 * len.abs() + 1e-9));
    }

    #[test]
    fn classic_bridge_swaps_y_and_z(
        len in -100.0..100.0f64,
        h in -10.0..10.0f64,
        v in -10.0..10.0f64,
    ) {
        let c = ClassicPolarVector3::new(len, Angle::from_radians(h), Angle::from_radians(v));
        let a = classic_to_vector(&c);
        let b = polar_vector3_to_vector(&classic_to_polar_vector3(&c));
        prop_assert!(b.approx_eq_within(&Vector3::new([a.x(), a.z(), a.y()]), 1e-9));
    }

    #[test]
    fn quaternion_and_matrix_extraction_agree(
        h in -4.0..4.0f64,
        p in -4.0..4.0f64,
        b in -4.0..4.0f64,
    ) {
        let q = euler_angles_to_quaternion(&EulerAngles::new(
            Angle::from_radians(h),
            Angle::from_radians(p),
            Angle::from_radians(b),
        ));
        let direct = quaternion_to_euler_angles(&q);
        let via_matrix = matrix_to_euler_angles(&quaternion_to_matrix(&q));
        assert_euler_close(&direct, &via_matrix, 1e-9);
    }

    #[test]
    fn quaternion_and_matrix_extraction_agree_at_lock(
        h in -4.0..4.0f64,
        b in -4.0..4.0f64,
    ) {
        let q = euler_angles_to_quaternion(&EulerAngles::new(
            Angle::from_radians(h),
            Angle::HALF_PI,
            Angle::from_radians(b),
        ));
        let direct = quaternion_to_euler_angles(&q);
        let via_matrix = matrix_to_euler_angles(&quaternion_to_matrix(&q));
        prop_assert!(direct.is_gimbal_locked() && via_matrix.is_gimbal_locked());
        assert_euler_close(&direct, &via_matrix, 1e-9);
        assert_angle_close(via_matrix.heading(), Angle::from_radians(h), 1e-9);
    }

    #[test]
    fn canonical_euler_keeps_orientation(
        h in -10.0..10.0f64,
        p in -10.0..10.0f64,
        b in -10.0..10.0f64,
    ) {
        let e = EulerAngles::new(
            Angle::from_radians(h),
            Angle::from_radians(p),
            Angle::from_radians(b),
        );
        let c = e.canonical();
        prop_assert!(c.is_canonical());
        assert_matrix_close(&euler_angles_to_matrix(&e), &euler_angles_to_matrix(&c), 1e-9);
    }

    #[test]
    fn matrix_to_quaternion_reproduces_matrix(
        h in -4.0..4.0f64,
        p in -4.0..4.0f64,
        b in -4.0..4.0f64,
    ) {
        let m = euler_angles_to_matrix(&EulerAngles::new(
            Angle::from_radians(h),
            Angle::from_radians(p),
            Angle::from_radians(b),
        ));
        let q = matrix_to_quaternion(&m);
        prop_assert!((q.magnitude() - 1.0).abs() < 1e-12);
        assert_matrix_close(&quaternion_to_matrix(&q), &m, 1e-12);
    }

    #[test]
    fn conjugate_is_an_involution(
        w in -2.0..2.0f64,
        x in -2.0..2.0f64,
        y in -2.0..2.0f64,
        z in -2.0..2.0f64,
    ) {
        let q = Quaternion::new(w, x, y, z);
        prop_assert_eq!(q.conjugate().conjugate(), q);
    }
}
