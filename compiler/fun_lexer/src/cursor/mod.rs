//! Character cursor with line/column tracking.
//!
//! The cursor walks the source one `char` at a time and keeps the 1-based
//! line and column of the character it is looking at. A newline bumps the
//! line and resets the column. The cursor is [`Copy`], so lookahead that
//! spans several characters can snapshot it and carry on from the copy.

use fun_ir::Pos;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the current character.
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The unconsumed tail of the source.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Current character, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Position of the current character.
    #[inline]
    pub(crate) fn pos(&self) -> Pos {
        Pos::new(self.line, self.column)
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Consume the current character and return it.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
    }

    /// Source text from `start` (a byte offset) to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Check whether the unconsumed input starts with `text`.
    pub(crate) fn starts_with(&self, text: &str) -> bool {
        self.rest().starts_with(text)
    }
}

#[cfg(test)]
mod tests;
