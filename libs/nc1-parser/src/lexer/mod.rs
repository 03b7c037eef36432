//! # NC1 Line Lexer
//!
//! Splits a data line into whitespace-separated tokens and classifies each
//! one as a number (optional sign, fraction, exponent and trailing letter) or
//! a word.
//!
//! ## Example
//!
//! ```rust
//! use nc1_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("  v   1.5e3  -2E-1").tokenize();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].kind, TokenKind::Word);
//! assert_eq!(tokens[1].number(), Some((1500.0, None)));
//! assert_eq!(tokens[2].number(), Some((-0.2, None)));
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

// =============================================================================
// LEXER
// =============================================================================

/// Line lexer.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole line.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            self.cursor.eat_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            let start = self.cursor.offset();
            self.cursor.eat_while(|c| !c.is_whitespace());
            let text = self.cursor.slice_from(start);
            let kind = match scan_number(text) {
                Some((value, modifier)) => TokenKind::Number { value, modifier },
                None => TokenKind::Word,
            };
            self.tokens.push(Token::new(kind, text, start));
        }
        self.tokens
    }
}

/// Remainder of `line` starting at `token`, right-trimmed.
pub fn rest_of_line<'a>(line: &'a str, token: &Token) -> &'a str {
    line.get(token.start..).unwrap_or("").trim_end()
}

// =============================================================================
// NUMBERS
// =============================================================================

/// Scans a complete token as a number.
///
/// ## Returns
///
/// The value and the optional single trailing ASCII letter, or `None` when
/// the token is not numeric.
///
/// ## Example
///
/// ```rust
/// use nc1_parser::lexer::scan_number;
///
/// assert_eq!(scan_number("+12.5"), Some((12.5, None)));
/// assert_eq!(scan_number("45.00u"), Some((45.0, Some('u'))));
/// assert_eq!(scan_number("3e2"), Some((300.0, None)));
/// assert_eq!(scan_number("12e"), Some((12.0, Some('e'))));
/// assert_eq!(scan_number("12.0.0"), None);
/// assert_eq!(scan_number("-"), None);
/// ```
pub fn scan_number(text: &str) -> Option<(f64, Option<char>)> {
    let mut cursor = Cursor::new(text);
    cursor.eat_if(|c| c == '+' || c == '-');
    let int_digits = cursor.eat_while(|c| c.is_ascii_digit());
    let mut frac_digits = 0;
    if cursor.eat_if(|c| c == '.') {
        frac_digits = cursor.eat_while(|c| c.is_ascii_digit());
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(cursor.peek(), Some('e' | 'E')) {
        let exponent_follows = match cursor.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => cursor.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if exponent_follows {
            cursor.advance();
            cursor.eat_if(|c| c == '+' || c == '-');
            cursor.eat_while(|c| c.is_ascii_digit());
        }
    }

    let value: f64 = cursor.slice_from(0).parse().ok()?;
    let modifier = match cursor.advance() {
        None => None,
        Some(c) if c.is_ascii_alphabetic() && cursor.is_eof() => Some(c),
        Some(_) => return None,
    };
    Some((value, modifier))
}

// =============================================================================
// TESTS
// =============================================================================
