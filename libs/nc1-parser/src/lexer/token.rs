//! # Tokens
//!
//! Whitespace-separated fields of an NC1 data line.

// =============================================================================
// TOKEN
// =============================================================================

/// A field produced by the lexer.
///
/// ## Example
///
/// ```rust
/// use nc1_parser::lexer::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("  o  120.00s").tokenize();
/// assert_eq!(tokens[1].kind, TokenKind::Number { value: 120.0, modifier: Some('s') });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text.
    pub text: String,
    /// Byte offset of the token in its line.
    pub start: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
        }
    }

    /// Numeric value and modifier, if the token is a number.
    pub fn number(&self) -> Option<(f64, Option<char>)> {
        match self.kind {
            TokenKind::Number { value, modifier } => Some((value, modifier)),
            TokenKind::Word => None,
        }
    }

    /// Single-letter word, e.g. a face code or a slot marker.
    pub fn letter(&self) -> Option<char> {
        if self.kind != TokenKind::Word {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Number with an optional trailing modifier letter: `-2E-1`, `45.00u`.
    Number { value: f64, modifier: Option<char> },
    /// Anything else.
    Word,
}
