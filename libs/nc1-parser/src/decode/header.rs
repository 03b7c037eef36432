//! ST block: piece identification, profile and cut angles.

use nc1_model::{Block, BlockLine, EndCuts, PieceHeader, ProfileDescriptor, ProfileFamily};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::StructuralError;
use crate::lexer::scan_number;

/// Lines 0..=12 (ids through the fourth dimension) must be present.
pub const MANDATORY_HEADER_LINES: usize = 13;

const ROOT_RADIUS: usize = 13;
const WEIGHT: usize = 14;
const SURFACE: usize = 15;
const CUTS: usize = 16;
const TEXTS: usize = 20;
const HEADER_LINES: usize = 24;

pub(super) fn decode(
    block: &Block,
    diagnostics: &mut Diagnostics,
) -> Result<(PieceHeader, ProfileDescriptor), StructuralError> {
    let lines = &block.lines;
    if lines.len() < MANDATORY_HEADER_LINES {
        return Err(StructuralError::TruncatedHeader {
            line: lines.last().map_or(block.line, |l| l.number),
            found: lines.len(),
            required: MANDATORY_HEADER_LINES,
        });
    }

    let code_line = &lines[7];
    let family = ProfileFamily::from_code(code_line.text.trim()).ok_or_else(|| {
        StructuralError::UnknownProfileCode {
            line: code_line.number,
            code: code_line.text.trim().to_string(),
        }
    })?;

    let header = PieceHeader {
        order: text_value(&lines[0]),
        drawing: text_value(&lines[1]),
        phase: text_value(&lines[2]),
        piece: text_value(&lines[3]),
        grade: text_value(&lines[4]),
        quantity: quantity(&lines[5], diagnostics),
        texts: [
            optional_text(lines, TEXTS),
            optional_text(lines, TEXTS + 1),
            optional_text(lines, TEXTS + 2),
            optional_text(lines, TEXTS + 3),
        ],
    };

    let length = mandatory_number(&lines[8], "length")?;
    let dims = [
        mandatory_number(&lines[9], "dimension 1")?,
        mandatory_number(&lines[10], "dimension 2")?,
        mandatory_number(&lines[11], "dimension 3")?,
        mandatory_number(&lines[12], "dimension 4")?,
    ];

    let mut profile =
        ProfileDescriptor::from_dimension_lines(family, text_value(&lines[6]), length, dims);
    profile.root_radius = optional_number(lines, ROOT_RADIUS, "root radius", diagnostics);
    profile.weight_per_length = optional_number(lines, WEIGHT, "weight per length", diagnostics);
    profile.painting_surface = optional_number(lines, SURFACE, "painting surface", diagnostics);
    profile.cuts = EndCuts {
        web_start: optional_number(lines, CUTS, "web start cut", diagnostics),
        web_end: optional_number(lines, CUTS + 1, "web end cut", diagnostics),
        flange_start: optional_number(lines, CUTS + 2, "flange start cut", diagnostics),
        flange_end: optional_number(lines, CUTS + 3, "flange end cut", diagnostics),
    };

    if let Some(extra) = lines.get(HEADER_LINES) {
        diagnostics.warn(
            extra.number,
            DiagnosticKind::StrayLine,
            format!("{} extra ST lines ignored", lines.len() - HEADER_LINES),
        );
    }

    tracing::debug!(
        family = %profile.family,
        designation = %profile.designation,
        length = profile.length,
        "decoded ST block"
    );
    Ok((header, profile))
}

fn text_value(line: &BlockLine) -> String {
    match line.text.trim() {
        "-" => String::new(),
        text => text.to_string(),
    }
}

fn optional_text(lines: &[BlockLine], index: usize) -> String {
    lines.get(index).map(text_value).unwrap_or_default()
}

fn parse_plain(text: &str) -> Option<f64> {
    match scan_number(text.trim()) {
        Some((value, None)) => Some(value),
        _ => None,
    }
}

fn mandatory_number(line: &BlockLine, field: &'static str) -> Result<f64, StructuralError> {
    parse_plain(&line.text)
        .ok_or_else(|| StructuralError::invalid_value(line.number, field, line.text.trim()))
}

/// Piece count. A malformed value costs only its own line and reads as 1.
fn quantity(line: &BlockLine, diagnostics: &mut Diagnostics) -> u32 {
    match parse_plain(&line.text) {
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 => {
            value as u32
        }
        _ => {
            diagnostics.warn(
                line.number,
                DiagnosticKind::OptionalField,
                format!("quantity `{}` is not a whole number, using 1", line.text.trim()),
            );
            1
        }
    }
}

fn optional_number(
    lines: &[BlockLine],
    index: usize,
    field: &'static str,
    diagnostics: &mut Diagnostics,
) -> f64 {
    let Some(line) = lines.get(index) else {
        return 0.0;
    };
    match parse_plain(&line.text) {
        Some(value) => value,
        None => {
            diagnostics.warn(
                line.number,
                DiagnosticKind::OptionalField,
                format!("{field} `{}` is not a number, using 0", line.text.trim()),
            );
            0.0
        }
    }
}
