//! Cursor over an in-memory source buffer.
//!
//! The cursor steps through the source one code point at a time and keeps
//! a human-readable row/column alongside the byte offset. Row and column
//! are 1-based and only feed diagnostics; tokenization decisions look at
//! the current and next character alone.
//!
//! Bulk skips (comment bodies, string contents) locate their end with
//! `memchr` and then fold the skipped segment into the row/column counters
//! in one step instead of walking it character by character.

use std::fmt;

/// A location in the source: byte offset plus 1-based row and column.
///
/// Columns count code points, not bytes, so `ä` occupies one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub row: u32,
    /// 1-based column (in code points) within the line.
    pub col: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Self = Self {
        offset: 0,
        row: 1,
        col: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Copyable cursor over a source string.
///
/// The cursor is [`Copy`], so taking a snapshot before a speculative scan
/// is a plain assignment.
///
/// # Invariant
///
/// `pos` only ever increases and always sits on a `char` boundary of
/// `source`. [`current()`](Self::current) is `Some` iff `pos < source.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current byte offset into `source`.
    pos: usize,
    row: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            row: Position::START.row,
            col: Position::START.col,
        }
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Advance past the current character.
    ///
    /// At end of input this is a no-op.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.row += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current offset, row and column.
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            row: self.row,
            col: self.col,
        }
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract the source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie on character boundaries within the source.
    /// Offsets taken from [`pos()`](Self::pos) always do.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consumed) or to end of input.
    ///
    /// Used by the comment scanner to skip a line comment body.
    pub fn eat_until_newline_or_eof(&mut self) {
        let end = match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos + offset,
            None => self.source.len(),
        };
        self.jump_to(end);
    }

    /// Advance to the next occurrence of `delim` without consuming it.
    ///
    /// Returns `true` if `delim` was found. Otherwise the cursor ends at
    /// end of input and `false` is returned.
    pub fn eat_until(&mut self, delim: char) -> bool {
        let mut utf8 = [0u8; 4];
        let needle = delim.encode_utf8(&mut utf8);
        match memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes()) {
            Some(offset) => {
                self.jump_to(self.pos + offset);
                true
            }
            None => {
                self.jump_to(self.source.len());
                false
            }
        }
    }

    /// Advance past the next occurrence of `delim`, consuming it.
    ///
    /// Returns `true` if `delim` was found. Otherwise the cursor ends at
    /// end of input and `false` is returned.
    pub fn eat_past(&mut self, delim: &str) -> bool {
        match memchr::memmem::find(self.rest().as_bytes(), delim.as_bytes()) {
            Some(offset) => {
                self.jump_to(self.pos + offset + delim.len());
                true
            }
            None => {
                self.jump_to(self.source.len());
                false
            }
        }
    }

    /// Move to byte offset `end`, folding the skipped text into row/column.
    fn jump_to(&mut self, end: usize) {
        debug_assert!(end >= self.pos, "cursor must not move backwards");
        let skipped = &self.source[self.pos..end];
        let bytes = skipped.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last_newline) => {
                let newlines = memchr::memchr_iter(b'\n', bytes).count();
                self.row = self.row.saturating_add(saturating_u32(newlines));
                self.col = 1u32.saturating_add(saturating_u32(
                    skipped[last_newline + 1..].chars().count(),
                ));
            }
            None => {
                self.col = self.col.saturating_add(saturating_u32(skipped.chars().count()));
            }
        }
        self.pos = end;
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
