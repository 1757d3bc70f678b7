//! Fixed lookup tables for punctuation and keywords.
//!
//! Both tables are process-wide constants shared by every scanner. They are
//! small enough that a linear scan beats any hashing.
//!
//! # Paren naming
//!
//! `(` maps to [`TokenKind::RightParen`] and `)` to [`TokenKind::LeftParen`].
//! Downstream consumers of the rendered token stream depend on these names,
//! so the table keeps them.
//!
//! # Reserved keywords
//!
//! `if`, `then` and `else` have token kinds but no entry here, so they scan
//! as identifiers.

use crate::TokenKind;

/// Single-character punctuation marks.
pub const PUNCTUATION: [(u8, TokenKind); 5] = [
    (b';', TokenKind::Semicolon),
    (b'=', TokenKind::Equals),
    (b'(', TokenKind::RightParen),
    (b')', TokenKind::LeftParen),
    (b'+', TokenKind::Plus),
];

/// Keywords, matched against whole candidate lexemes only.
pub const KEYWORDS: [(&str, TokenKind); 3] = [
    ("let", TokenKind::Let),
    ("while", TokenKind::While),
    ("print", TokenKind::Print),
];

/// Look up the punctuation kind for a byte.
#[inline]
pub fn punctuation(byte: u8) -> Option<TokenKind> {
    PUNCTUATION
        .iter()
        .find(|(b, _)| *b == byte)
        .map(|&(_, kind)| kind)
}

/// Look up a keyword by exact text.
///
/// Returns `None` for identifiers, including ones that merely start with a
/// keyword (`letx`).
#[inline]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == text)
        .map(|&(_, kind)| kind)
}
