//! # Block Decoders
//!
//! Turns split blocks into an [`Nc1Document`]. Only the ST block can abort;
//! every other problem is reported and the offending line is skipped.

mod contours;
mod header;
mod holes;
mod markings;

use nc1_model::{
    Block, BlockCode, BlockLine, ContourKind, FaceCode, FeatureId, Nc1Document,
};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{FieldError, FieldErrorKind, StructuralError};
use crate::lexer::Token;

pub use header::MANDATORY_HEADER_LINES;

/// Hands out feature ids in file order.
#[derive(Debug, Default)]
pub(crate) struct FeatureIds {
    last: u32,
}

impl FeatureIds {
    pub(crate) fn next(&mut self) -> FeatureId {
        self.last += 1;
        FeatureId(self.last)
    }
}

/// Decodes all blocks into a document.
pub fn decode_document(
    blocks: Vec<Block>,
    diagnostics: &mut Diagnostics,
) -> Result<Nc1Document, StructuralError> {
    let header_index = blocks
        .iter()
        .position(|b| b.code == BlockCode::ST)
        .ok_or(StructuralError::MissingHeader)?;
    let (header, profile) = header::decode(&blocks[header_index], diagnostics)?;
    let mut document = Nc1Document::new(header, profile);
    let mut ids = FeatureIds::default();

    for (index, block) in blocks.into_iter().enumerate() {
        if index == header_index {
            continue;
        }
        match block.code {
            BlockCode::ST => diagnostics.warn(
                block.line,
                DiagnosticKind::DuplicateHeader,
                "second ST block ignored",
            ),
            BlockCode::BO => {
                holes::decode(&block, &mut ids, diagnostics, &mut document.features)
            }
            BlockCode::AK => contours::decode(
                &block,
                ContourKind::External,
                &mut ids,
                diagnostics,
                &mut document.features,
            ),
            BlockCode::IK => contours::decode(
                &block,
                ContourKind::Internal,
                &mut ids,
                diagnostics,
                &mut document.features,
            ),
            BlockCode::SI => markings::decode(&block, diagnostics, &mut document.markings),
            _ => document.retained.push(block),
        }
    }

    tracing::debug!(
        features = document.features.len(),
        markings = document.markings.len(),
        retained = document.retained.len(),
        "decoded NC1 document"
    );
    Ok(document)
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

pub(crate) fn face_at(line: &BlockLine, token: &Token) -> Result<FaceCode, FieldError> {
    token
        .letter()
        .and_then(FaceCode::from_char)
        .ok_or_else(|| FieldError::new(line.number, FieldErrorKind::UnknownFace(token.text.clone())))
}

/// Number with its optional modifier letter.
pub(crate) fn number_at(line: &BlockLine, token: &Token) -> Result<(f64, Option<char>), FieldError> {
    token
        .number()
        .ok_or_else(|| FieldError::new(line.number, FieldErrorKind::NotANumber(token.text.clone())))
}

/// Number that must not carry a modifier.
pub(crate) fn plain_number_at(line: &BlockLine, token: &Token) -> Result<f64, FieldError> {
    match number_at(line, token)? {
        (value, None) => Ok(value),
        (_, Some(modifier)) => Err(FieldError::new(
            line.number,
            FieldErrorKind::BadModifier {
                token: token.text.clone(),
                modifier,
            },
        )),
    }
}

pub(crate) fn missing_fields(line: &BlockLine, expected: usize, found: usize) -> FieldError {
    FieldError::new(line.number, FieldErrorKind::MissingFields { expected, found })
}
