//! # Mesh Errors
//!
//! Failures while building primitives and subtracting cutters.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Inputs that cannot be stitched into a closed solid (mismatched
    /// outline loops).
    #[error("invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Zero-size primitive, collapsed outline or out-of-range angle.
    #[error("degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    #[error("boolean subtraction failed: {message}")]
    BooleanFailed { message: String },

    #[error("result has {count} triangles, the limit is {max}")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }

    /// True for errors raised while building a primitive.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}
