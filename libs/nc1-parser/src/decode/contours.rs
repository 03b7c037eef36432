//! AK/IK blocks: closed contours.
//!
//! Point lines are `[<face>] <x>[m] <y>[m] [<bulge>[m]] ...`. The face letter
//! may open every line or only the first one of a contour. A new contour
//! starts when the face changes or when the running contour is already
//! closed. Columns past the bulge are ignored. Points keep file order.

use config::constants::CONTOUR_CLOSE_EPSILON;
use nc1_model::{
    Block, BlockLine, Contour, ContourKind, ContourPoint, FaceCode, FeatureRecord, PointMark,
};

use super::{face_at, missing_fields, number_at, FeatureIds};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{FieldError, FieldErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};

struct PendingContour {
    face: FaceCode,
    line: usize,
    points: Vec<ContourPoint>,
}

impl PendingContour {
    fn is_closed(&self) -> bool {
        self.points.len() >= 4
            && self.points.first().zip(self.points.last()).is_some_and(|(a, b)| {
                (a.x - b.x).hypot(a.y - b.y) < CONTOUR_CLOSE_EPSILON
            })
    }
}

pub(super) fn decode(
    block: &Block,
    kind: ContourKind,
    ids: &mut FeatureIds,
    diagnostics: &mut Diagnostics,
    out: &mut Vec<FeatureRecord>,
) {
    let mut pending: Option<PendingContour> = None;

    for line in &block.lines {
        let tokens = Lexer::new(&line.text).tokenize();
        let Some(first) = tokens.first() else {
            continue;
        };

        let point_tokens = if first.kind == TokenKind::Word {
            let face = match face_at(line, first) {
                Ok(face) => face,
                Err(error) => {
                    diagnostics.field_error(error);
                    continue;
                }
            };
            let continues = pending
                .as_ref()
                .is_some_and(|p| p.face == face && !p.is_closed());
            if !continues {
                if let Some(done) = pending.take() {
                    finish(done, kind, ids, diagnostics, out);
                }
                pending = Some(PendingContour {
                    face,
                    line: line.number,
                    points: Vec::new(),
                });
            }
            &tokens[1..]
        } else {
            &tokens[..]
        };

        if point_tokens.is_empty() {
            continue;
        }
        let Some(contour) = pending.as_mut() else {
            diagnostics.field_error(FieldError::new(line.number, FieldErrorKind::MissingFace));
            continue;
        };
        match decode_point(line, point_tokens) {
            Ok(point) => contour.points.push(point),
            Err(error) => diagnostics.field_error(error),
        }
    }

    if let Some(done) = pending.take() {
        finish(done, kind, ids, diagnostics, out);
    }
}

fn decode_point(line: &BlockLine, tokens: &[Token]) -> Result<ContourPoint, FieldError> {
    if tokens.len() < 2 {
        return Err(missing_fields(line, 2, tokens.len()));
    }
    let mut mark = None;
    let mut values = [0.0; 3];
    for (slot, token) in values.iter_mut().zip(tokens) {
        let (value, modifier) = number_at(line, token)?;
        if let Some(letter) = modifier {
            let parsed = PointMark::from_char(letter);
            if !parsed.is_contour_mark() {
                return Err(FieldError::new(
                    line.number,
                    FieldErrorKind::BadModifier {
                        token: token.text.clone(),
                        modifier: letter,
                    },
                ));
            }
            mark.get_or_insert(parsed);
        }
        *slot = value;
    }

    Ok(ContourPoint {
        x: values[0],
        y: values[1],
        bulge: values[2],
        mark,
    })
}

fn finish(
    pending: PendingContour,
    kind: ContourKind,
    ids: &mut FeatureIds,
    diagnostics: &mut Diagnostics,
    out: &mut Vec<FeatureRecord>,
) {
    let mut contour = Contour::new(kind, pending.points);
    if contour.close() {
        diagnostics.warn(
            pending.line,
            DiagnosticKind::ContourClosed,
            format!(
                "{} contour on face {} was not closed, first point appended",
                kind.block_code(),
                pending.face
            ),
        );
    }
    if contour.points.len() < 4 {
        diagnostics.field_error(FieldError::new(
            pending.line,
            FieldErrorKind::TooFewPoints {
                count: contour.points.len(),
            },
        ));
        return;
    }
    out.push(FeatureRecord::contour(ids.next(), pending.face, contour));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use nc1_model::{BlockCode, BlockLine, FeatureKind};

    fn block(code: BlockCode, lines: &[&str]) -> Block {
        let mut block = Block::new(code, 1);
        block.lines = lines
            .iter()
            .enumerate()
            .map(|(i, text)| BlockLine {
                number: i + 2,
                text: text.to_string(),
            })
            .collect();
        block
    }

    fn run(block: &Block, kind: ContourKind) -> (Vec<FeatureRecord>, Vec<crate::Diagnostic>) {
        let mut ids = FeatureIds::default();
        let mut diags = Diagnostics::new();
        let mut out = Vec::new();
        decode(block, kind, &mut ids, &mut diags, &mut out);
        (out, diags.into_vec())
    }

    #[test]
    fn test_modifiers_are_stripped_mid_line() {
        let b = block(
            BlockCode::IK,
            &[
                "  v   10.00u   20.00   0.00",
                "      60.00    20.00s  0.00",
                "      60.00    50.00",
                "      10.00    50.00",
                "      10.00u   20.00",
            ],
        );
        let (out, diags) = run(&b, ContourKind::Internal);
        assert!(diags.is_empty(), "{diags:?}");
        let FeatureKind::Contour(contour) = &out[0].kind else {
            panic!("expected contour");
        };
        assert_eq!(contour.points.len(), 5);
        assert_eq!(contour.points[0].mark, Some(PointMark::Face(FaceCode::Bottom)));
        assert_eq!(contour.points[1].mark, Some(PointMark::Segment));
        assert_eq!(contour.points[1].y, 20.0);
    }

    #[test]
    fn test_unclosed_contour_is_closed_with_warning() {
        let b = block(
            BlockCode::IK,
            &["  v  0  0", "     30  0", "     30  30"],
        );
        let (out, diags) = run(&b, ContourKind::Internal);
        assert_eq!(out.len(), 1);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::ContourClosed);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn test_two_point_contour_is_dropped() {
        let b = block(BlockCode::AK, &["  v  0  0", "     30  0"]);
        let (out, diags) = run(&b, ContourKind::External);
        assert!(out.is_empty());
        assert_eq!(diags.last().map(|d| d.kind), Some(DiagnosticKind::FieldParse));
    }

    #[test]
    fn test_several_contours_in_one_block() {
        let b = block(
            BlockCode::AK,
            &[
                "  o  0  0", "  10  0", "  10  10", "  0  0",
                "  u  0  0", "  20  0", "  20  20", "  0  0",
            ],
        );
        let (out, _) = run(&b, ContourKind::External);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].face, FaceCode::Top);
        assert_eq!(out[1].face, FaceCode::Bottom);
        assert_eq!(out[1].id.0, 2);
    }

    #[test]
    fn test_bad_point_line_is_skipped_only() {
        let b = block(
            BlockCode::IK,
            &["  v  0  0", "  40  zz", "  40  0", "  40  40", "  0  0"],
        );
        let (out, diags) = run(&b, ContourKind::Internal);
        assert_eq!(out.len(), 1);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_foreign_modifier_is_rejected() {
        let b = block(
            BlockCode::IK,
            &["  v  0  0", "  40q  0", "  40  40", "  0  40", "  0  0"],
        );
        let (out, diags) = run(&b, ContourKind::Internal);
        assert_eq!(out.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn test_face_letter_on_every_point_line() {
        let b = block(
            BlockCode::AK,
            &[
                "  v     0.00    0.00   0.00",
                "  v  3000.00    0.00   0.00",
                "  v  3000.00  200.00   0.00",
                "  v  2900.00  200.00   0.00",
                "  v  2900.00  100.00   0.00",
                "  v   100.00  100.00   0.00",
                "  v   100.00  200.00   0.00",
                "  v     0.00  200.00   0.00",
                "  v     0.00    0.00   0.00",
            ],
        );
        let (out, diags) = run(&b, ContourKind::External);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].face, FaceCode::Bottom);
        let FeatureKind::Contour(contour) = &out[0].kind else {
            panic!("expected contour");
        };
        assert_eq!(contour.points.len(), 9);
        assert!(contour.is_closed());
    }

    #[test]
    fn test_closed_contour_ends_on_same_face() {
        let b = block(
            BlockCode::IK,
            &[
                "  v  10  10", "  v  40  10", "  v  40  40", "  v  10  10",
                "  v  60  10", "  v  90  10", "  v  90  40", "  v  60  10",
            ],
        );
        let (out, diags) = run(&b, ContourKind::Internal);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].x, 60.0);
    }

    #[test]
    fn test_trailing_columns_are_ignored() {
        let b = block(
            BlockCode::AK,
            &[
                "  o  0.00   0.00  0.00  0.00  0.00",
                "  o 50.00   0.00  0.00  0.00  0.00",
                "  o 50.00  40.00  0.00  0.00  0.00",
                "  o  0.00   0.00  0.00  0.00  0.00",
            ],
        );
        let (out, diags) = run(&b, ContourKind::External);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(out.len(), 1);
    }
}
