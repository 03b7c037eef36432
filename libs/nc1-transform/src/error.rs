//! # Transform Errors

use nc1_model::{FaceCode, ProfileFamily};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coordinate named in envelope violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    /// Arc length around a round tube.
    Arc,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Arc => "arc length",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The face letter has no meaning for the profile family.
    #[error("face `{face}` is not defined for {family} profiles")]
    UnsupportedFace {
        family: ProfileFamily,
        face: FaceCode,
    },

    /// A resolved point lies outside the member envelope plus margin.
    #[error("{axis} = {value:.3} is outside [{min:.3}, {max:.3}] by more than {margin}")]
    OutOfBounds {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
        margin: f64,
    },

    /// Input coordinates are NaN or infinite.
    #[error("non-finite face coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    /// No face of the profile carries the pose.
    #[error("pose does not lie on any face of the {family} profile")]
    NoMatchingFace { family: ProfileFamily },
}

impl TransformError {
    pub fn unsupported(family: ProfileFamily, face: FaceCode) -> Self {
        Self::UnsupportedFace { family, face }
    }

    /// True for envelope violations, which callers report as validation
    /// failures.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
