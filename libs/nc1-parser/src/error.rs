//! # Parse Errors
//!
//! Two levels of failure:
//!
//! - [`StructuralError`] aborts the parse (missing or unusable ST block).
//! - [`FieldError`] is recovered: the offending line or contour is skipped
//!   and reported as a [`crate::Diagnostic`].
//!
//! ## Example
//!
//! ```rust
//! use nc1_parser::error::{FieldError, FieldErrorKind};
//!
//! let error = FieldError::new(12, FieldErrorKind::NotANumber("1,5".into()));
//! assert_eq!(error.to_string(), "line 12: `1,5` is not a number");
//! ```

use thiserror::Error;

// =============================================================================
// STRUCTURAL ERRORS
// =============================================================================

/// Unrecoverable parse failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    #[error("input is {size} bytes, the limit is {max}")]
    InputTooLarge { size: usize, max: usize },

    #[error("no ST block found")]
    MissingHeader,

    #[error("line {line}: ST block has {found} lines, {required} are mandatory")]
    TruncatedHeader {
        line: usize,
        found: usize,
        required: usize,
    },

    #[error("line {line}: unknown profile code `{code}`")]
    UnknownProfileCode { line: usize, code: String },

    #[error("line {line}: {field} `{text}` is not valid")]
    InvalidHeaderValue {
        line: usize,
        field: &'static str,
        text: String,
    },
}

impl StructuralError {
    pub fn invalid_value(line: usize, field: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            line,
            field,
            text: text.into(),
        }
    }
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Recoverable error bound to one source line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct FieldError {
    pub line: usize,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(line: usize, kind: FieldErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldErrorKind {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("unexpected field `{0}`")]
    UnexpectedField(String),

    #[error("`{0}` is not a face code")]
    UnknownFace(String),

    #[error("modifier `{modifier}` is not allowed on `{token}`")]
    BadModifier { token: String, modifier: char },

    #[error("contour has {count} points, at least 4 are required")]
    TooFewPoints { count: usize },

    #[error("contour point before any face code")]
    MissingFace,
}
