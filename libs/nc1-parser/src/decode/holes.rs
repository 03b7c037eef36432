//! BO block: round, slotted and rectangular holes.
//!
//! Line layout: `<face> <x>[ref] <y> <d>[kind] [<depth>] [l|r] [<p1> [<p2>]]`.

use nc1_model::{Block, BlockLine, Depth, FeatureId, FeatureKind, FeatureRecord, PointMark};

use super::{face_at, missing_fields, number_at, plain_number_at, FeatureIds};
use crate::diagnostics::Diagnostics;
use crate::error::{FieldError, FieldErrorKind};
use crate::lexer::{Lexer, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Round,
    Slot,
    Rect,
}

impl Shape {
    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'l' => Some(Shape::Slot),
            'r' => Some(Shape::Rect),
            _ => None,
        }
    }
}

pub(super) fn decode(
    block: &Block,
    ids: &mut FeatureIds,
    diagnostics: &mut Diagnostics,
    out: &mut Vec<FeatureRecord>,
) {
    for line in &block.lines {
        match decode_line(line) {
            Ok(mut record) => {
                record.id = ids.next();
                out.push(record);
            }
            Err(error) => diagnostics.field_error(error),
        }
    }
}

fn decode_line(line: &BlockLine) -> Result<FeatureRecord, FieldError> {
    let tokens = Lexer::new(&line.text).tokenize();
    if tokens.len() < 4 {
        return Err(missing_fields(line, 4, tokens.len()));
    }

    let face = face_at(line, &tokens[0])?;
    let (x, reference) = number_at(line, &tokens[1])?;
    let y = plain_number_at(line, &tokens[2])?;
    let (diameter, kind_mark) = number_at(line, &tokens[3])?;

    let mut shape = match kind_mark {
        None => Shape::Round,
        Some(mark) => Shape::from_letter(mark).ok_or_else(|| {
            FieldError::new(
                line.number,
                FieldErrorKind::BadModifier {
                    token: tokens[3].text.clone(),
                    modifier: mark,
                },
            )
        })?,
    };

    let mut standalone = false;
    let mut before: Vec<(f64, &Token)> = Vec::new();
    let mut after: Vec<(f64, &Token)> = Vec::new();
    for token in &tokens[4..] {
        if let Some(letter) = token.letter() {
            let marked = Shape::from_letter(letter)
                .filter(|s| !standalone && (kind_mark.is_none() || *s == shape))
                .ok_or_else(|| unexpected(line, token))?;
            shape = marked;
            standalone = true;
            continue;
        }
        let value = plain_number_at(line, token)?;
        if standalone {
            after.push((value, token));
        } else {
            before.push((value, token));
        }
    }

    let (depth, params) = if standalone || kind_mark.is_none() {
        if let Some((_, extra)) = before.get(1) {
            return Err(unexpected(line, extra));
        }
        (before.first().map(|(v, _)| *v), after)
    } else {
        let depth = before.first().map(|(v, _)| *v);
        (depth, before.into_iter().skip(1).collect())
    };
    let depth = Depth::from_field(depth);

    let kind = match shape {
        Shape::Round => FeatureKind::Hole { diameter, depth },
        Shape::Slot => {
            if params.is_empty() {
                return Err(missing_fields(line, 7, tokens.len()));
            }
            if let Some((_, extra)) = params.get(2) {
                return Err(unexpected(line, extra));
            }
            FeatureKind::SlottedHole {
                diameter,
                elongation: params[0].0,
                angle: params.get(1).map_or(0.0, |(v, _)| *v),
                depth,
            }
        }
        Shape::Rect => {
            if params.is_empty() {
                return Err(missing_fields(line, 7, tokens.len()));
            }
            if let Some((_, extra)) = params.get(1) {
                return Err(unexpected(line, extra));
            }
            FeatureKind::RectHole {
                width: diameter,
                height: params[0].0,
                depth,
            }
        }
    };

    let mut record = FeatureRecord::new(FeatureId(0), face, x, y, kind);
    record.reference = reference.map(PointMark::from_char);
    Ok(record)
}

fn unexpected(line: &BlockLine, token: &Token) -> FieldError {
    FieldError::new(line.number, FieldErrorKind::UnexpectedField(token.text.clone()))
}
