//! # Diagnostics
//!
//! Recovered problems collected as values on the parse result and mirrored to
//! `tracing` so recovery is visible with or without a subscriber.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Input was adjusted and kept.
    Warning,
    /// Input was dropped.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Two-letter code outside the known set; its lines were skipped.
    UnknownBlock,
    /// Data line outside any block.
    StrayLine,
    /// Malformed field; the line or contour was skipped.
    FieldParse,
    /// Optional ST field was malformed and defaulted.
    OptionalField,
    /// Unclosed contour was closed automatically.
    ContourClosed,
    /// Second ST block ignored.
    DuplicateHeader,
    /// No EN block at the end of input.
    MissingEnd,
    /// Content after EN ignored.
    TrailingContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: usize,
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Diagnostic sink used while parsing.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, line: usize, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(line, ?kind, "{message}");
        self.items.push(Diagnostic {
            line,
            severity: Severity::Warning,
            kind,
            message,
        });
    }

    pub fn field_error(&mut self, error: FieldError) {
        tracing::warn!(line = error.line, "skipped: {}", error.kind);
        self.items.push(Diagnostic {
            line: error.line,
            severity: Severity::Error,
            kind: DiagnosticKind::FieldParse,
            message: error.kind.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
