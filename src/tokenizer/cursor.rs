//! # Cursor
//!
//! Read position over the scanner input. The cursor hands out one `char` at a
//! time, allows a single character of look-ahead and keeps the line/column of
//! the current character up to date.
//!
//! Lines and columns are 1-based. Columns count characters, offsets count bytes,
//! so a multi-byte letter advances the offset by its UTF-8 length but the column
//! by one.

use serde::Serialize;

/// Position of the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: Position::default(),
        }
    }

    /// Character under the cursor, `None` once the input is exhausted.
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one, without moving.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Moves past the current character. A no-op at end of input.
    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };

        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }

    /// Advances over `len` bytes of the remaining input, one character at a time
    /// so that line breaks inside the consumed text are accounted for.
    pub fn advance_by(&mut self, len: usize) {
        let target = (self.position.offset + len).min(self.input.len());
        while self.position.offset < target {
            self.advance();
        }
    }

    /// Unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.position.offset..]
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.input.len()
    }

    /// Input text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position.offset]
    }
}
