//! Position-tracked view over the input buffer.

use std::fmt;

use memchr::{memchr_iter, memrchr};
use serde::Serialize;

use crate::grammar::Rule;

/// Location of a character in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextPosition {
    /// Byte offset from the start of the buffer
    pub offset: usize,
    /// 1-based line number, counting LF characters
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

impl TextPosition {
    /// Resolve a byte offset into line and column.
    pub fn locate(text: &str, offset: usize) -> Self {
        let before = &text.as_bytes()[..offset];
        let line = memchr_iter(b'\n', before).count() + 1;
        let line_start = memrchr(b'\n', before).map_or(0, |nl| nl + 1);
        let column = text[line_start..offset].chars().count() + 1;
        TextPosition {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )
    }
}

/// An index into a text buffer that advances only on successful matches.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::at(text, 0)
    }

    /// Start at `offset`, which must be a character boundary.
    pub fn at(text: &'a str, offset: usize) -> Self {
        debug_assert!(text.is_char_boundary(offset));
        Cursor { text, offset }
    }

    /// Match `rule` at the current offset.
    ///
    /// On success the cursor moves past the match and the matched slice is
    /// returned; on failure the cursor stays where it was.
    #[inline]
    pub fn attempt(&mut self, rule: &Rule) -> Option<&'a str> {
        let start = self.offset;
        let end = rule.match_at(self.text, start)?;
        self.offset = end;
        Some(&self.text[start..end])
    }

    /// Current offset, to hand back to [`restore`](Self::restore).
    #[inline]
    pub fn checkpoint(&self) -> usize {
        self.offset
    }

    /// Roll back to an earlier checkpoint.
    #[inline]
    pub fn restore(&mut self, checkpoint: usize) {
        self.offset = checkpoint;
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset == self.text.len()
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Line and column of the current offset.
    pub fn position(&self) -> TextPosition {
        TextPosition::locate(self.text, self.offset)
    }
}
