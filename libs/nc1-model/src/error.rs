//! # Validation Errors
//!
//! Record-level invariant violations. These are recoverable per feature in
//! batch mode and fatal in single-feature mode.

use thiserror::Error;

/// A record violates one of its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Dimension is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// NaN or infinite value.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// Contour has too few points.
    #[error("contour needs at least {min} points, got {count}")]
    TooFewPoints { count: usize, min: usize },

    /// First and last contour points differ.
    #[error("contour is not closed (gap {gap:.4})")]
    OpenContour { gap: f64 },

    /// Two non-adjacent contour edges cross or touch.
    #[error("contour edges {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },

    /// Contour encloses no area.
    #[error("contour encloses no area")]
    ZeroArea,

    /// Cross-section dimensions are inconsistent for the family.
    #[error("invalid {family} cross-section: {message}")]
    InvalidSection { family: &'static str, message: String },
}

impl ValidationError {
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositive { field, value }
    }

    pub fn invalid_section(family: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSection {
            family,
            message: message.into(),
        }
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::non_positive(field, value));
    }
    Ok(())
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}
