//! Byte cursor for efficient input navigation

use crate::error::Pos;

/// Cursor for navigating byte input with position tracking
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor from byte slice
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte ahead without consuming
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos.saturating_add(ahead)).copied()
    }

    /// Peek at the next `n` bytes without consuming
    pub fn peek_bytes(&self, n: usize) -> Option<&'a [u8]> {
        self.input.get(self.pos..self.pos.saturating_add(n))
    }

    /// Decode the character at the cursor without consuming
    ///
    /// Returns `None` at end of input or when the bytes at the cursor are not
    /// valid UTF-8.
    pub fn current_char(&self) -> Option<char> {
        let rest = self.input.get(self.pos..)?;
        let window = rest.get(..rest.len().min(4))?;
        match std::str::from_utf8(window) {
            Ok(s) => s.chars().next(),
            // A 4-byte window can cut the following character short; the
            // valid prefix still holds the character at the cursor.
            Err(e) if e.valid_up_to() > 0 => std::str::from_utf8(window.get(..e.valid_up_to())?)
                .ok()?
                .chars()
                .next(),
            Err(_) => None,
        }
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Advance cursor by `n` bytes
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance past one decoded character, counting it as a single column
    pub fn advance_char(&mut self, c: char) {
        self.pos = self.pos.saturating_add(c.len_utf8()).min(self.input.len());
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// Skip whitespace
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.current() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get slice from start to current position
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}
