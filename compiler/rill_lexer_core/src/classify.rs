//! Byte and lexeme classification.
//!
//! All predicates operate on single bytes or ASCII text. Non-ASCII bytes are
//! never whitespace or punctuation, so they always end up inside a candidate
//! lexeme (and a candidate containing one never classifies as an integer or
//! identifier).

/// Returns `true` for the C `isspace` set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Differs from [`u8::is_ascii_whitespace`], which excludes vertical tab.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` for the single-character punctuation marks `; = ( ) +`.
#[inline]
pub const fn is_punctuation(byte: u8) -> bool {
    matches!(byte, b';' | b'=' | b'(' | b')' | b'+')
}

/// Returns `true` if `byte` ends a maximal-munch candidate.
///
/// Punctuation is a boundary just like whitespace, so `x=5` splits into
/// three lexemes.
#[inline]
pub const fn is_lexeme_boundary(byte: u8) -> bool {
    is_whitespace(byte) || is_punctuation(byte)
}

/// Returns `true` if `text` is one or more ASCII digits and nothing else.
pub fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `text` has identifier shape: `[a-z][a-zA-Z0-9_]*`.
pub fn is_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            first.is_ascii_lowercase()
                && rest.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'_')
        }
        None => false,
    }
}
