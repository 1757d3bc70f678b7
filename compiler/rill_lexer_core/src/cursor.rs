//! Bounds-checked byte cursor over a source buffer.
//!
//! The cursor advances through the source byte-by-byte. EOF is the position
//! equal to the source length; [`Cursor::current()`] returns `None` there.
//! The position never moves backwards and never exceeds the source length.

/// Byte cursor over a source string.
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
///
/// # Invariant
///
/// `pos <= source.len()` at all times.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Advance the cursor by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Token boundaries produced by the scanner always do: they sit next to
    /// an ASCII byte or at EOF.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let bytes = self.source.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance past a run of whitespace (including newlines).
    ///
    /// Returns the number of `\n` bytes consumed so the caller can keep its
    /// line counter in step.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line counts beyond u32::MAX are not representable in tokens"
    )]
    pub fn eat_whitespace(&mut self) -> u32 {
        let start = self.pos;
        self.eat_while(crate::is_whitespace);
        let consumed = &self.source.as_bytes()[start..self.pos];
        memchr::memchr_iter(b'\n', consumed).count() as u32
    }

    /// Advance to the end of the current maximal-munch candidate.
    ///
    /// Consumes bytes until EOF, whitespace, or punctuation.
    #[inline]
    pub fn eat_candidate(&mut self) {
        self.eat_while(|b| !crate::is_lexeme_boundary(b));
    }
}

#[cfg(test)]
mod tests;
