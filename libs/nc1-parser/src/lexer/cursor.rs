//! # Character Cursor
//!
//! Peekable character cursor over a single line. Tracks the byte offset so
//! tokens can slice the source without copying.
//!
//! ## Example
//!
//! ```rust
//! use nc1_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("12.5s");
//! assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 2);
//! assert_eq!(cursor.peek(), Some('.'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the next character.
    byte: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    pub fn offset(&self) -> usize {
        self.byte
    }

    pub fn is_eof(&self) -> bool {
        self.rest().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek `n` characters ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.byte..]
    }

    /// Consume the current character if it satisfies `predicate`.
    pub fn eat_if(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if predicate(c) => {
                self.byte += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `predicate` holds and returns how many.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.eat_if(&predicate) {
            count += 1;
        }
        count
    }

    /// Source slice from `start` to the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
