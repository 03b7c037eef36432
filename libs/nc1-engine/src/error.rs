//! # Engine Errors
//!
//! One error per failed feature, tagged with the pipeline stage that raised
//! it.

use nc1_mesh::MeshError;
use nc1_model::ValidationError;
use nc1_transform::TransformError;
use serde::Serialize;
use thiserror::Error;

/// Pipeline stage a feature failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Validate,
    Transform,
    Build,
    Subtract,
}

/// Why a feature could not be applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Record invariant violated (non-positive size, bad contour).
    #[error("invalid feature: {0}")]
    Validation(#[from] ValidationError),

    /// Face unsupported or position outside the member envelope.
    #[error("cannot place feature: {0}")]
    Transform(#[from] TransformError),

    /// Cutter could not be built.
    #[error("cannot build cutter: {0}")]
    Build(MeshError),

    /// The boolean kernel failed.
    #[error("boolean subtraction failed: {0}")]
    Boolean(MeshError),
}

impl FeatureError {
    /// Stage that raised the error.
    pub fn stage(&self) -> Stage {
        match self {
            FeatureError::Validation(_) => Stage::Validate,
            FeatureError::Transform(_) => Stage::Transform,
            FeatureError::Build(_) => Stage::Build,
            FeatureError::Boolean(_) => Stage::Subtract,
        }
    }

    /// True for failures a pre-check catches: invalid records and positions
    /// outside the envelope.
    pub fn is_validation(&self) -> bool {
        match self {
            FeatureError::Validation(_) => true,
            FeatureError::Transform(err) => {
                err.is_out_of_bounds() || matches!(err, TransformError::NonFinite { .. })
            }
            _ => false,
        }
    }

    /// Stable reason code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            FeatureError::Validation(_) => "invalid-feature",
            FeatureError::Transform(TransformError::OutOfBounds { .. }) => "out-of-bounds",
            FeatureError::Transform(TransformError::UnsupportedFace { .. }) => "unsupported-face",
            FeatureError::Transform(_) => "bad-position",
            FeatureError::Build(_) => "degenerate-primitive",
            FeatureError::Boolean(_) => "boolean-failed",
        }
    }
}

/// Why a member could not be set up for feature processing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The profile section could not be extruded.
    #[error("cannot build base solid: {0}")]
    BaseSolid(MeshError),

    /// A saw cut at one of the member ends failed.
    #[error("cannot apply end cut: {0}")]
    EndCut(MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use nc1_model::{FaceCode, ProfileFamily};
    use nc1_transform::Axis;

    #[test]
    fn test_out_of_bounds_counts_as_validation() {
        let err = FeatureError::from(TransformError::OutOfBounds {
            axis: Axis::X,
            value: 3050.0,
            min: 0.0,
            max: 3000.0,
            margin: 10.0,
        });
        assert!(err.is_validation());
        assert_eq!(err.code(), "out-of-bounds");
        assert_eq!(err.stage(), Stage::Transform);
    }

    #[test]
    fn test_unsupported_face_is_not_validation() {
        let err = FeatureError::from(TransformError::unsupported(
            ProfileFamily::Plate,
            FaceCode::Top,
        ));
        assert!(!err.is_validation());
        assert_eq!(err.code(), "unsupported-face");
    }

    #[test]
    fn test_boolean_error_message() {
        let err = FeatureError::Boolean(MeshError::boolean_failed("kernel down"));
        assert_eq!(err.stage(), Stage::Subtract);
        assert!(err.to_string().contains("kernel down"));
    }
}
