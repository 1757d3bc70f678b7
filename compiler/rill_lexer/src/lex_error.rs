//! Lexer diagnostics.
//!
//! Scanning never fails. Lexemes the scanner cannot classify are recorded
//! here as a side channel; whether they also appear in the token stream is
//! decided by [`UnknownLexemePolicy`](crate::UnknownLexemePolicy).

use std::fmt;

/// Byte range in the source, end exclusive.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A candidate that is not a keyword, an integer, or an identifier.
    UnrecognizedLexeme,
}

/// A lexer diagnostic with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("line {line}: unrecognized lexeme `{text}`")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The offending source text.
    pub text: String,
    pub line: u32,
    pub span: Span,
}

impl LexError {
    #[cold]
    pub fn unrecognized_lexeme(text: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind: LexErrorKind::UnrecognizedLexeme,
            text: text.into(),
            line,
            span,
        }
    }
}
