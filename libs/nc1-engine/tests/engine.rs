//! Batch and single-feature processing on real profiles.

use std::f64::consts::TAU;
use std::sync::atomic::AtomicBool;

use approx::assert_relative_eq;
use config::{PipelineConfig, PrecheckPolicy};
use glam::DVec3;
use nc1_engine::{BatchStatus, CsgEngine, EngineError, Outcome, SkipReason, Stage};
use nc1_mesh::{BooleanKernel, BspKernel, Mesh, MeshError};
use nc1_model::{
    Contour, ContourKind, Depth, EndCuts, FaceCode, FeatureId, FeatureRecord, Nc1Document,
    PieceHeader, ProfileDescriptor, ProfileFamily,
};

fn heb200() -> ProfileDescriptor {
    ProfileDescriptor::from_dimension_lines(ProfileFamily::IH, "HEB200", 3000.0, [200.0, 200.0, 15.0, 9.0])
}

fn plate() -> ProfileDescriptor {
    ProfileDescriptor::from_dimension_lines(ProfileFamily::Plate, "BL12", 400.0, [200.0, 0.0, 0.0, 12.0])
}

fn plate_hole(id: u32, x: f64, diameter: f64) -> FeatureRecord {
    FeatureRecord::hole(FeatureId(id), FaceCode::Front, x, 100.0, diameter, Depth::Through)
}

fn polygon_area(radius: f64, segments: u32) -> f64 {
    let n = segments as f64;
    0.5 * n * radius * radius * (TAU / n).sin()
}

fn engine() -> CsgEngine {
    CsgEngine::new(PipelineConfig::default())
}

fn lenient() -> CsgEngine {
    CsgEngine::new(PipelineConfig::default().with_precheck(PrecheckPolicy::Lenient))
}

/// Fails every subtraction whose cutter spans `x`.
struct RejectAt(f64);

impl BooleanKernel for RejectAt {
    fn subtract(&self, base: &Mesh, cutter: &Mesh) -> Result<Mesh, MeshError> {
        let (min, max) = cutter.bounding_box();
        if (min.x..=max.x).contains(&self.0) {
            return Err(MeshError::boolean_failed("kernel refused cutter"));
        }
        BspKernel.subtract(base, cutter)
    }
}

#[test]
fn test_top_flange_hole_removes_flange_material() {
    let profile = heb200();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let hole = FeatureRecord::hole(FeatureId(1), FaceCode::Top, 500.0, 50.0, 22.0, Depth::Through);

    let drilled = engine.process(&base, &hole, &profile).unwrap();

    let removed = base.stats().volume - drilled.stats().volume;
    assert_relative_eq!(removed, polygon_area(11.0, 22) * 15.0, epsilon = 1e-3);
    let applied = &drilled.features()[0];
    assert_eq!(applied.id, FeatureId(1));
    assert!(applied.cut);
    assert_relative_eq!(applied.pose.position.y, 100.0, epsilon = 1e-9);
    assert_relative_eq!(applied.pose.normal().dot(DVec3::NEG_Y), 1.0, epsilon = 1e-9);
}

#[test]
fn test_web_hole_pose_is_horizontal() {
    let profile = heb200();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let hole = FeatureRecord::hole(FeatureId(1), FaceCode::Front, 1200.0, 50.0, 18.0, Depth::Through);

    let drilled = engine.process(&base, &hole, &profile).unwrap();

    let pose = drilled.features()[0].pose;
    assert_relative_eq!(pose.position.x, 1200.0, epsilon = 1e-9);
    assert_relative_eq!(pose.position.y, -50.0, epsilon = 1e-9);
    assert_relative_eq!(pose.position.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(pose.normal().y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_single_feature_error_leaves_base_untouched() {
    let profile = plate();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let copy = base.clone();

    let err = engine.process(&base, &plate_hole(1, 100.0, -5.0), &profile).unwrap_err();
    assert_eq!(err.stage(), Stage::Validate);
    assert_eq!(err.code(), "invalid-feature");

    let err = engine.process(&base, &plate_hole(2, 450.0, 10.0), &profile).unwrap_err();
    assert_eq!(err.code(), "out-of-bounds");
    assert_eq!(base, copy);
}

#[test]
fn test_strict_batch_rejects_before_any_boolean() {
    let profile = plate();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let features = [
        plate_hole(1, 100.0, 10.0),
        plate_hole(2, 200.0, -5.0),
        plate_hole(3, profile.length + 50.0, 10.0),
    ];

    let batch = engine.process_batch(&base, &features, &profile);

    assert_eq!(batch.booleans_attempted, 0);
    assert_eq!(
        batch.status,
        BatchStatus::Rejected {
            features: vec![FeatureId(2), FeatureId(3)]
        }
    );
    assert!(batch.status.to_string().contains("#2"));
    assert_eq!(batch.solid, base);
    assert_eq!(
        batch.outcomes[0].outcome,
        Outcome::Skipped {
            reason: SkipReason::BatchRejected
        }
    );
    assert_eq!(batch.outcomes[1].failure().unwrap().code, "invalid-feature");
    assert_eq!(batch.outcomes[2].failure().unwrap().code, "out-of-bounds");
}

#[test]
fn test_lenient_batch_applies_valid_features() {
    let profile = plate();
    let engine = lenient();
    let base = engine.base(&profile).unwrap();
    let features = [
        plate_hole(1, 100.0, 10.0),
        plate_hole(2, 200.0, -5.0),
        plate_hole(3, 300.0, 10.0),
    ];

    let batch = engine.process_batch(&base, &features, &profile);

    assert_eq!(batch.status, BatchStatus::Partial);
    assert_eq!(batch.booleans_attempted, 2);
    assert_eq!(batch.applied().count(), 2);
    assert!(matches!(batch.outcomes[1].outcome, Outcome::Rejected(_)));
    assert!(!batch.solid.is_applied(FeatureId(2)));
}

#[test]
fn test_boolean_failure_skips_feature_and_continues() {
    let profile = plate();
    let engine = CsgEngine::with_kernel(RejectAt(200.0), PipelineConfig::default());
    let base = engine.base(&profile).unwrap();
    let features = [
        plate_hole(1, 100.0, 10.0),
        plate_hole(2, 200.0, 10.0),
        plate_hole(3, 300.0, 10.0),
    ];

    let batch = engine.process_batch(&base, &features, &profile);

    assert_eq!(batch.status, BatchStatus::Partial);
    assert_eq!(batch.booleans_attempted, 3);
    let failure = batch.outcome(FeatureId(2)).unwrap().failure().unwrap();
    assert_eq!(failure.stage, Stage::Subtract);
    assert_eq!(failure.code, "boolean-failed");
    let ids: Vec<_> = batch.solid.features().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![FeatureId(1), FeatureId(3)]);
}

#[test]
fn test_same_batch_twice_gives_same_topology() {
    let profile = heb200();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let features = [
        FeatureRecord::hole(FeatureId(1), FaceCode::Top, 500.0, 50.0, 22.0, Depth::Through),
        FeatureRecord::hole(FeatureId(2), FaceCode::Front, 1200.0, 50.0, 18.0, Depth::Through),
        FeatureRecord::slot(FeatureId(3), FaceCode::Bottom, 2000.0, 40.0, 18.0, 30.0, 0.0),
    ];

    let first = engine.process_batch(&base, &features, &profile);
    let second = engine.process_batch(&base, &features, &profile);

    assert!(first.is_complete());
    assert_eq!(first.solid.mesh().vertex_count(), second.solid.mesh().vertex_count());
    assert_eq!(first.solid.mesh().triangle_count(), second.solid.mesh().triangle_count());
}

#[test]
fn test_reapplying_features_is_skipped() {
    let profile = plate();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let features = [plate_hole(1, 100.0, 10.0), plate_hole(2, 300.0, 10.0)];

    let once = engine.process_batch(&base, &features, &profile);
    let again = engine.process_batch(&once.solid, &features, &profile);

    assert_eq!(again.booleans_attempted, 0);
    assert!(again.is_complete());
    assert!(again.outcomes.iter().all(|o| o.outcome
        == Outcome::Skipped {
            reason: SkipReason::AlreadyApplied
        }));
    assert_eq!(again.solid, once.solid);

    let single = engine.process(&once.solid, &features[0], &profile).unwrap();
    assert_eq!(single, once.solid);
}

#[test]
fn test_cancelled_batch_keeps_last_solid() {
    let profile = plate();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let features = [plate_hole(1, 100.0, 10.0), plate_hole(2, 300.0, 10.0)];

    let batch = engine.process_batch_until(&base, &features, &profile, &AtomicBool::new(true));

    assert_eq!(batch.status, BatchStatus::Cancelled);
    assert_eq!(batch.booleans_attempted, 0);
    assert_eq!(batch.solid, base);
    assert!(batch.outcomes.iter().all(|o| o.outcome
        == Outcome::Skipped {
            reason: SkipReason::Cancelled
        }));
}

#[test]
fn test_outer_contour_covering_face_is_recorded_without_cut() {
    let profile = plate();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let contour = Contour::from_corners(
        ContourKind::External,
        &[(0.0, 0.0), (400.0, 0.0), (400.0, 200.0), (0.0, 200.0)],
    );
    let features = [FeatureRecord::contour(FeatureId(1), FaceCode::Front, contour)];

    let batch = engine.process_batch(&base, &features, &profile);

    assert!(batch.is_complete());
    assert_eq!(batch.booleans_attempted, 0);
    assert!(matches!(batch.outcomes[0].outcome, Outcome::Applied { cut: false, .. }));
    assert_eq!(batch.solid.mesh(), base.mesh());
}

#[test]
fn test_contour_vertex_outside_envelope_is_rejected() {
    let profile = plate();
    let engine = engine();
    let base = engine.base(&profile).unwrap();
    let contour = Contour::from_corners(
        ContourKind::Internal,
        &[(100.0, 50.0), (200.0, 50.0), (150.0, 260.0)],
    );
    let feature = FeatureRecord::contour(FeatureId(1), FaceCode::Front, contour);

    let err = engine.process(&base, &feature, &profile).unwrap_err();
    assert_eq!(err.code(), "out-of-bounds");
}

#[test]
fn test_base_applies_end_cuts() {
    let mut profile = plate();
    profile.cuts = EndCuts {
        web_start: 45.0,
        ..EndCuts::default()
    };
    let base = engine().base(&profile).unwrap();
    assert_relative_eq!(base.stats().volume, 400.0 * 200.0 * 12.0 - 5000.0 * 12.0, epsilon = 1e-3);
}

#[test]
fn test_members_are_processed_in_input_order() {
    let mut broken = plate();
    broken.length = 0.0;
    let documents = [
        Nc1Document {
            features: vec![plate_hole(1, 100.0, 10.0)],
            ..Nc1Document::new(PieceHeader::default(), plate())
        },
        Nc1Document::new(PieceHeader::default(), broken),
        Nc1Document {
            features: vec![FeatureRecord::hole(FeatureId(1), FaceCode::Top, 500.0, 50.0, 22.0, Depth::Through)],
            ..Nc1Document::new(PieceHeader::default(), heb200())
        },
    ];

    let results = engine().process_members(&documents);

    assert_eq!(results.len(), 3);
    assert!(results[0].as_ref().unwrap().is_complete());
    assert!(matches!(results[1], Err(EngineError::BaseSolid(_))));
    let beam = results[2].as_ref().unwrap();
    assert_relative_eq!(beam.solid.bounding_box().1.x, 3000.0, epsilon = 1e-9);
}
