//! # Block Splitter
//!
//! Groups raw lines into [`Block`]s. Comment lines (`**`) and blank lines are
//! dropped everywhere; a tag is a line at column 0 made of exactly two
//! upper-case ASCII letters.

use nc1_model::{Block, BlockCode, BlockLine};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Splits `text` into known blocks, stopping at `EN`.
pub fn split_blocks(text: &str, diagnostics: &mut Diagnostics) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    let mut in_unknown = false;
    let mut ended = false;
    let mut last_line = 0;

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("**") {
            continue;
        }
        last_line = number;

        if ended {
            diagnostics.warn(
                number,
                DiagnosticKind::TrailingContent,
                "content after EN ignored",
            );
            break;
        }

        if is_block_tag(line) {
            blocks.extend(current.take());
            in_unknown = false;
            match BlockCode::from_tag(line) {
                Some(BlockCode::EN) => ended = true,
                Some(code) => current = Some(Block::new(code, number)),
                None => {
                    in_unknown = true;
                    diagnostics.warn(
                        number,
                        DiagnosticKind::UnknownBlock,
                        format!("unknown block `{line}` skipped"),
                    );
                }
            }
            continue;
        }

        match current.as_mut() {
            Some(block) => block.lines.push(BlockLine {
                number,
                text: line.to_string(),
            }),
            None if in_unknown => {}
            None => diagnostics.warn(
                number,
                DiagnosticKind::StrayLine,
                "line outside any block ignored",
            ),
        }
    }

    blocks.extend(current.take());
    if !ended {
        diagnostics.warn(last_line, DiagnosticKind::MissingEnd, "missing EN block");
    }
    blocks
}

fn is_block_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() == 2 && bytes.iter().all(u8::is_ascii_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    #[test]
    fn test_split_known_blocks() {
        let mut diags = Diagnostics::new();
        let blocks = split_blocks("ST\n  a\n  b\nBO\n  v 1 2 3\nEN\n", &mut diags);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].code, BlockCode::ST);
        assert_eq!(blocks[0].lines.len(), 2);
        assert_eq!(blocks[1].lines[0].number, 5);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_comments_and_blanks_are_skipped() {
        let mut diags = Diagnostics::new();
        let text = "** header\r\nST\r\n\r\n  a\r\n** note\r\n  b\r\nEN\r\n";
        let blocks = split_blocks(text, &mut diags);
        let texts: Vec<_> = blocks[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["  a", "  b"]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unknown_block_is_skipped_with_warning() {
        let mut diags = Diagnostics::new();
        let blocks = split_blocks("ST\n  a\nZZ\n  junk\nBO\n  x\nEN\n", &mut diags);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].code, BlockCode::BO);
        let diags = diags.into_vec();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::UnknownBlock);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_indented_tag_is_data() {
        let mut diags = Diagnostics::new();
        let blocks = split_blocks("ST\n  UB\nEN\n", &mut diags);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines[0].text, "  UB");
    }

    #[test]
    fn test_missing_end_and_trailing_content() {
        let mut diags = Diagnostics::new();
        split_blocks("ST\n  a\n", &mut diags);
        assert_eq!(diags.into_vec()[0].kind, DiagnosticKind::MissingEnd);

        let mut diags = Diagnostics::new();
        split_blocks("ST\n  a\nEN\n  tail\n", &mut diags);
        assert_eq!(diags.into_vec()[0].kind, DiagnosticKind::TrailingContent);
    }
}
