//! # Feature Record Tests

use super::*;
use approx::assert_relative_eq;

fn corners(kind: ContourKind, pts: &[(f64, f64)]) -> Contour {
    Contour::from_corners(kind, pts)
}

// =============================================================================
// HOLE / SLOT / RECT VALIDATION
// =============================================================================

#[test]
fn test_hole_rejects_non_positive_diameter() {
    let hole = FeatureRecord::hole(FeatureId(2), FaceCode::Top, 100.0, 50.0, -5.0, Depth::Through);
    assert_eq!(
        hole.validate(),
        Err(ValidationError::non_positive("diameter", -5.0))
    );
}

#[test]
fn test_hole_rejects_zero_blind_depth() {
    let hole = FeatureRecord::hole(FeatureId(1), FaceCode::Top, 100.0, 50.0, 18.0, Depth::Blind(-1.0));
    assert_eq!(
        hole.validate(),
        Err(ValidationError::non_positive("depth", -1.0))
    );
}

#[test]
fn test_hole_rejects_nan_position() {
    let hole = FeatureRecord::hole(FeatureId(1), FaceCode::Front, f64::NAN, 50.0, 18.0, Depth::Through);
    assert_eq!(hole.validate(), Err(ValidationError::NonFinite { field: "x" }));
}

#[test]
fn test_slot_allows_zero_elongation() {
    let slot = FeatureRecord::slot(FeatureId(1), FaceCode::Front, 100.0, 50.0, 20.0, 0.0, 0.0);
    assert!(slot.validate().is_ok());
}

#[test]
fn test_rect_requires_both_sides() {
    let rect = FeatureRecord::rect(FeatureId(4), FaceCode::Front, 100.0, 50.0, 40.0, 0.0);
    assert_eq!(
        rect.validate(),
        Err(ValidationError::non_positive("height", 0.0))
    );
}

#[test]
fn test_depth_from_field() {
    assert_eq!(Depth::from_field(None), Depth::Through);
    assert_eq!(Depth::from_field(Some(0.0)), Depth::Through);
    assert_eq!(Depth::from_field(Some(8.0)), Depth::Blind(8.0));
    assert_eq!(Depth::Through.resolve(10.0), 10.0);
    assert_eq!(Depth::Blind(4.0).resolve(10.0), 4.0);
}

#[test]
fn test_slot_footprint() {
    let slot = FeatureKind::SlottedHole {
        diameter: 20.0,
        elongation: 40.0,
        angle: 30.0,
        depth: Depth::Through,
    };
    assert_eq!(slot.footprint(), (60.0, 20.0));
    assert_eq!(slot.label(), "slot");
}

// =============================================================================
// CONTOURS
// =============================================================================

#[test]
fn test_contour_close_appends_first_point() {
    let mut contour = Contour::new(
        ContourKind::Internal,
        vec![
            ContourPoint::new(0.0, 0.0),
            ContourPoint::new(10.0, 0.0),
            ContourPoint::new(10.0, 10.0),
        ],
    );
    assert!(!contour.is_closed());
    assert!(contour.close());
    assert!(contour.is_closed());
    assert_eq!(contour.points.len(), 4);
    assert!(!contour.close());
}

#[test]
fn test_contour_requires_four_points() {
    let contour = Contour::new(
        ContourKind::Internal,
        vec![
            ContourPoint::new(0.0, 0.0),
            ContourPoint::new(10.0, 0.0),
            ContourPoint::new(0.0, 0.0),
        ],
    );
    assert_eq!(
        contour.validate(),
        Err(ValidationError::TooFewPoints { count: 3, min: 4 })
    );
}

#[test]
fn test_open_contour_is_invalid() {
    let contour = Contour::new(
        ContourKind::Internal,
        vec![
            ContourPoint::new(0.0, 0.0),
            ContourPoint::new(10.0, 0.0),
            ContourPoint::new(10.0, 10.0),
            ContourPoint::new(0.0, 10.0),
        ],
    );
    assert!(matches!(
        contour.validate(),
        Err(ValidationError::OpenContour { .. })
    ));
}

#[test]
fn test_bow_tie_is_self_intersecting() {
    let contour = corners(
        ContourKind::Internal,
        &[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)],
    );
    assert!(matches!(
        contour.validate(),
        Err(ValidationError::SelfIntersecting { .. })
    ));
}

#[test]
fn test_collinear_contour_has_zero_area() {
    let contour = corners(
        ContourKind::Internal,
        &[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)],
    );
    assert_eq!(contour.validate(), Err(ValidationError::ZeroArea));
}

#[test]
fn test_signed_area_follows_winding() {
    let ccw = corners(
        ContourKind::External,
        &[(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)],
    );
    assert_relative_eq!(ccw.signed_area(), 200.0);
    let cw = corners(
        ContourKind::External,
        &[(0.0, 0.0), (0.0, 10.0), (20.0, 10.0), (20.0, 0.0)],
    );
    assert_relative_eq!(cw.signed_area(), -200.0);
}

#[test]
fn test_rectangle_detection() {
    let rect = corners(
        ContourKind::External,
        &[(0.0, 0.0), (3000.0, 0.0), (3000.0, 200.0), (0.0, 200.0)],
    );
    assert!(rect.is_rectangular());
}

#[test]
fn test_nine_point_contour_is_not_rectangular() {
    let notched = corners(
        ContourKind::External,
        &[
            (0.0, 0.0),
            (3000.0, 0.0),
            (3000.0, 200.0),
            (2950.0, 200.0),
            (2950.0, 150.0),
            (2900.0, 150.0),
            (2900.0, 200.0),
            (0.0, 200.0),
        ],
    );
    assert_eq!(notched.points.len(), 9);
    assert!(!notched.is_rectangular());
    assert!(notched.validate().is_ok());
}

#[test]
fn test_bulged_rectangle_is_not_rectangular() {
    let mut rect = corners(
        ContourKind::Internal,
        &[(0.0, 0.0), (30.0, 0.0), (30.0, 20.0), (0.0, 20.0)],
    );
    rect.points[1].bulge = 10.0;
    assert!(!rect.is_rectangular());
}

#[test]
fn test_contour_record_takes_first_point_as_position() {
    let contour = corners(
        ContourKind::Internal,
        &[(100.0, 20.0), (150.0, 20.0), (150.0, 60.0)],
    );
    let record = FeatureRecord::contour(FeatureId(7), FaceCode::Front, contour);
    assert_eq!((record.x, record.y), (100.0, 20.0));
    assert_eq!(record.kind.label(), "inner-contour");
    assert_eq!(record.kind.footprint(), (50.0, 40.0));
}
