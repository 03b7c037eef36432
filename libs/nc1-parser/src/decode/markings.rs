//! SI block: text markings `<face> <x>[ref] <y> <angle> <height> <text>`.

use nc1_model::{Block, BlockLine, Marking, PointMark};

use super::{face_at, missing_fields, number_at, plain_number_at};
use crate::diagnostics::Diagnostics;
use crate::error::FieldError;
use crate::lexer::{rest_of_line, Lexer};

pub(super) fn decode(block: &Block, diagnostics: &mut Diagnostics, out: &mut Vec<Marking>) {
    for line in &block.lines {
        match decode_line(line) {
            Ok(marking) => out.push(marking),
            Err(error) => diagnostics.field_error(error),
        }
    }
}

fn decode_line(line: &BlockLine) -> Result<Marking, FieldError> {
    let tokens = Lexer::new(&line.text).tokenize();
    if tokens.len() < 6 {
        return Err(missing_fields(line, 6, tokens.len()));
    }
    let face = face_at(line, &tokens[0])?;
    let (x, reference) = number_at(line, &tokens[1])?;
    Ok(Marking {
        face,
        x,
        y: plain_number_at(line, &tokens[2])?,
        reference: reference.map(PointMark::from_char),
        angle: plain_number_at(line, &tokens[3])?,
        height: plain_number_at(line, &tokens[4])?,
        text: rest_of_line(&line.text, &tokens[5]).to_string(),
    })
}
