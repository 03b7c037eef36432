//! # NC1 Parser
//!
//! Block-structured DSTV/NC1 parser producing typed records.
//!
//! ## Architecture
//!
//! ```text
//! Text → Block Splitter → Blocks → Decoders → Nc1Document (+ Diagnostics)
//! ```
//!
//! Structural problems (no usable ST block) abort with [`StructuralError`].
//! Everything else is recovered per line and reported as a [`Diagnostic`].
//!
//! ## Example
//!
//! ```rust
//! use nc1_parser::parse;
//!
//! let text = "ST\n  1\n  2\n  3\n  4\n  S355\n  1\n  HEA200\n  I\n  3000\n  190\n  200\n  10\n  6.5\nEN\n";
//! let output = parse(text).unwrap();
//! assert_eq!(output.document.profile.length, 3000.0);
//! assert!(output.diagnostics.is_empty());
//! ```

pub mod blocks;
pub mod decode;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod writer;

pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::{FieldError, FieldErrorKind, StructuralError};
pub use writer::serialize;

use config::constants::MAX_FILE_SIZE;
use nc1_model::{Nc1Document, NoLookup, ProfileLookup};
use serde::Serialize;

use crate::diagnostics::Diagnostics;

/// Parsed document plus everything recovered along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    pub document: Nc1Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// True when at least one line or contour was dropped.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parses NC1 text without a dimension lookup.
pub fn parse(text: &str) -> Result<ParseOutput, StructuralError> {
    parse_with_lookup(text, &NoLookup)
}

/// Parses NC1 text and fills missing profile dimensions from `lookup`.
pub fn parse_with_lookup(
    text: &str,
    lookup: &dyn ProfileLookup,
) -> Result<ParseOutput, StructuralError> {
    if text.len() > MAX_FILE_SIZE {
        return Err(StructuralError::InputTooLarge {
            size: text.len(),
            max: MAX_FILE_SIZE,
        });
    }
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut diagnostics = Diagnostics::new();
    let blocks = blocks::split_blocks(text, &mut diagnostics);
    let mut document = decode::decode_document(blocks, &mut diagnostics)?;
    document.profile = document.profile.enriched(lookup);

    tracing::info!(
        designation = %document.profile.designation,
        features = document.features.len(),
        diagnostics = diagnostics.len(),
        "parsed NC1 file"
    );
    Ok(ParseOutput {
        document,
        diagnostics: diagnostics.into_vec(),
    })
}
