//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants,
//! helper functions and the validated pipeline configuration.

use crate::constants::*;
use crate::pipeline::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_contour_close_epsilon_below_printed_precision() {
    // Two printed decimals must never hide an open contour.
    assert!(CONTOUR_CLOSE_EPSILON < 0.01);
}

// =============================================================================
// FEATURE GEOMETRY TESTS
// =============================================================================

#[test]
fn test_bounds_margin_default() {
    assert_eq!(BOUNDS_MARGIN, 10.0);
}

#[test]
fn test_depth_factor_lengthens_cutters() {
    assert!(DEPTH_SAFETY_FACTOR > 1.0);
}

// =============================================================================
// COMPUTE_SEGMENTS TESTS
// =============================================================================

#[test]
fn test_compute_segments_clamps_to_min() {
    assert_eq!(compute_segments(1.0), MIN_SEGMENTS);
}

#[test]
fn test_compute_segments_clamps_to_max() {
    assert_eq!(compute_segments(1000.0), MAX_SEGMENTS);
}

#[test]
fn test_compute_segments_grows_with_size() {
    assert!(compute_segments(18.0) < compute_segments(26.0));
}

#[test]
fn test_compute_segments_rejects_garbage() {
    assert_eq!(compute_segments(f64::NAN), MIN_SEGMENTS);
    assert_eq!(compute_segments(-4.0), MIN_SEGMENTS);
}

#[test]
fn test_compute_segments_is_deterministic() {
    for d in [3.3, 17.5, 22.0, 31.9] {
        assert_eq!(compute_segments(d), compute_segments(d));
    }
}

// =============================================================================
// PIPELINE CONFIG TESTS
// =============================================================================

#[test]
fn test_default_pipeline_config_matches_constants() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.bounds_margin, BOUNDS_MARGIN);
    assert_eq!(cfg.depth_factor, DEPTH_SAFETY_FACTOR);
    assert_eq!(cfg.min_segments, MIN_SEGMENTS);
    assert_eq!(cfg.max_segments, MAX_SEGMENTS);
    assert_eq!(cfg.precheck, PrecheckPolicy::Strict);
}

#[test]
fn test_pipeline_config_validates_inputs() {
    assert_eq!(
        PipelineConfig::new(-1.0, 1.2, 16, 32, PrecheckPolicy::Strict).unwrap_err(),
        ConfigError::InvalidMargin(-1.0)
    );
    assert_eq!(
        PipelineConfig::new(10.0, 0.9, 16, 32, PrecheckPolicy::Strict).unwrap_err(),
        ConfigError::InvalidDepthFactor(0.9)
    );
    assert_eq!(
        PipelineConfig::new(10.0, 1.2, 32, 16, PrecheckPolicy::Strict).unwrap_err(),
        ConfigError::InvalidSegments { min: 32, max: 16 }
    );
}

#[test]
fn test_with_bounds_margin_revalidates() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.with_bounds_margin(2.5).unwrap().bounds_margin, 2.5);
    assert!(cfg.with_bounds_margin(f64::INFINITY).is_err());
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::InvalidSegments { min: 2, max: 1 }.to_string();
    assert!(msg.contains("2..1"));
}
