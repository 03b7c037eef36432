//! Transformer behaviour across all profile families.

use approx::assert_relative_eq;
use glam::DVec3;
use nc1_model::{FaceCode, ProfileDescriptor, ProfileFamily};
use nc1_transform::{
    inverse_transform, supported_faces, transform, transform_with_margin, Axis, TransformError,
};

fn beam() -> ProfileDescriptor {
    ProfileDescriptor::from_dimension_lines(
        ProfileFamily::IH,
        "HEB200",
        3000.0,
        [200.0, 200.0, 15.0, 9.0],
    )
}

fn all_profiles() -> Vec<ProfileDescriptor> {
    vec![
        beam(),
        ProfileDescriptor::from_dimension_lines(
            ProfileFamily::UC,
            "UPE200",
            2500.0,
            [200.0, 80.0, 11.0, 6.0],
        ),
        ProfileDescriptor::from_dimension_lines(
            ProfileFamily::LAngle,
            "L100x80x8",
            1800.0,
            [100.0, 80.0, 8.0, 8.0],
        ),
        ProfileDescriptor::from_dimension_lines(
            ProfileFamily::TubeRect,
            "RHS120x80x5",
            2000.0,
            [120.0, 80.0, 5.0, 5.0],
        ),
        ProfileDescriptor::from_dimension_lines(
            ProfileFamily::TubeCirc,
            "CHS168",
            2200.0,
            [168.3, 168.3, 6.3, 6.3],
        ),
        ProfileDescriptor::from_dimension_lines(
            ProfileFamily::Plate,
            "FL250x12",
            600.0,
            [250.0, 0.0, 0.0, 12.0],
        ),
    ]
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_top_flange_hole_sits_on_upper_surface() {
    let pose = transform(&beam(), FaceCode::Top, 500.0, 100.0).unwrap();
    assert_eq!(pose.position.y, 100.0);
    assert_eq!(pose.position.x, 500.0);
    assert!(pose.normal().abs_diff_eq(DVec3::NEG_Y, 1e-12));
    assert_eq!(pose.depth, 15.0);
}

#[test]
fn test_flange_axes_flip_between_top_and_bottom() {
    let top = transform(&beam(), FaceCode::Top, 500.0, 40.0).unwrap();
    let bottom = transform(&beam(), FaceCode::Bottom, 500.0, 40.0).unwrap();
    assert_relative_eq!(top.normal().y, -bottom.normal().y, epsilon = 1e-12);
    assert_relative_eq!(top.y_axis().z, -bottom.y_axis().z, epsilon = 1e-12);
    assert_eq!(bottom.position.y, -100.0);
}

#[test]
fn test_web_hole_maps_to_mid_plane() {
    let pose = transform(&beam(), FaceCode::Front, 1200.0, 50.0).unwrap();
    assert_eq!(pose.position, DVec3::new(1200.0, -50.0, 0.0));
    assert_relative_eq!(pose.normal().y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(pose.normal().z.abs(), 1.0, epsilon = 1e-12);
    assert_eq!(pose.entry.z, -4.5);
    assert_eq!(pose.depth, 9.0);
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[test]
fn test_hole_past_member_end_is_rejected_for_every_family() {
    for profile in all_profiles() {
        for &face in supported_faces(profile.family) {
            let err = transform(&profile, face, profile.length + 50.0, 10.0).unwrap_err();
            match err {
                TransformError::OutOfBounds { axis, max, .. } => {
                    assert_eq!(axis, Axis::X);
                    assert_eq!(max, profile.length);
                }
                other => panic!("{} {face}: unexpected {other:?}", profile.family),
            }
        }
    }
}

#[test]
fn test_margin_allows_small_overshoot() {
    assert!(transform(&beam(), FaceCode::Top, 3008.0, 10.0).is_ok());
    assert!(transform_with_margin(&beam(), FaceCode::Top, 3008.0, 10.0, 0.0).is_err());
}

#[test]
fn test_flange_y_beyond_width_names_z_axis() {
    let err = transform(&beam(), FaceCode::Top, 100.0, 260.0).unwrap_err();
    assert!(matches!(err, TransformError::OutOfBounds { axis: Axis::Z, .. }));
}

#[test]
fn test_unsupported_face() {
    let plate = all_profiles().pop().unwrap();
    let err = transform(&plate, FaceCode::Back, 10.0, 10.0).unwrap_err();
    assert_eq!(
        err,
        TransformError::UnsupportedFace {
            family: ProfileFamily::Plate,
            face: FaceCode::Back
        }
    );
}

#[test]
fn test_non_finite_input() {
    assert!(matches!(
        transform(&beam(), FaceCode::Top, f64::NAN, 0.0),
        Err(TransformError::NonFinite { .. })
    ));
}

// =============================================================================
// ROUND TRIP + DETERMINISM
// =============================================================================

#[test]
fn test_inverse_transform_round_trips_every_face() {
    for profile in all_profiles() {
        for &face in supported_faces(profile.family) {
            for (x, y) in [(0.0, 0.0), (125.5, 12.25), (400.0, 60.0)] {
                let pose = transform(&profile, face, x, y).unwrap();
                let (back_face, bx, by) = inverse_transform(&profile, &pose).unwrap();
                assert_eq!(back_face, face, "{}", profile.family);
                assert_relative_eq!(bx, x, epsilon = 1e-9);
                assert_relative_eq!(by, y, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_round_tube_wraps_angle() {
    let tube = &all_profiles()[4];
    let radius = tube.radius();
    let pose = transform(tube, FaceCode::Front, 300.0, radius * 1.5).unwrap();
    assert_relative_eq!(pose.position.y, radius * 1.5_f64.cos(), epsilon = 1e-9);
    assert_relative_eq!(pose.position.z, radius * 1.5_f64.sin(), epsilon = 1e-9);
    let (_, _, y) = inverse_transform(tube, &pose).unwrap();
    assert_relative_eq!(y, radius * 1.5, epsilon = 1e-9);
}

#[test]
fn test_round_tube_rejects_arc_outside_one_turn() {
    let tube = &all_profiles()[4];
    let circumference = std::f64::consts::TAU * tube.radius();
    for y in [-30.0, circumference, circumference + 40.0] {
        let err = transform(tube, FaceCode::Front, 200.0, y).unwrap_err();
        assert!(
            matches!(err, TransformError::OutOfBounds { axis: Axis::Arc, .. }),
            "y = {y}: {err:?}"
        );
    }
    let pose = transform(tube, FaceCode::Front, 200.0, circumference - 1.0).unwrap();
    let (_, _, y) = inverse_transform(tube, &pose).unwrap();
    assert_relative_eq!(y, circumference - 1.0, epsilon = 1e-6);
}

#[test]
fn test_transform_is_bit_identical() {
    for profile in all_profiles() {
        for &face in supported_faces(profile.family) {
            let a = transform(&profile, face, 333.333, 17.77).unwrap();
            let b = transform(&profile, face, 333.333, 17.77).unwrap();
            assert_eq!(a.position.to_array().map(f64::to_bits), b.position.to_array().map(f64::to_bits));
            assert_eq!(a.rotation.to_array().map(f64::to_bits), b.rotation.to_array().map(f64::to_bits));
        }
    }
}

#[test]
fn test_transform_is_callable_from_threads() {
    let profile = beam();
    let expected = transform(&profile, FaceCode::Top, 750.0, 30.0).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let pose = transform(&profile, FaceCode::Top, 750.0, 30.0).unwrap();
                assert_eq!(pose, expected);
            });
        }
    });
}

#[test]
fn test_inverse_rejects_foreign_pose() {
    let mut pose = transform(&beam(), FaceCode::Top, 100.0, 10.0).unwrap();
    pose.position.y += 40.0;
    assert!(matches!(
        inverse_transform(&beam(), &pose),
        Err(TransformError::NoMatchingFace { .. })
    ));
}
