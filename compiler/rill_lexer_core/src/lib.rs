//! Low-level building blocks for the Rill lexer.
//!
//! This crate knows nothing about tokens. It provides:
//!
//! - [`Cursor`]: a bounds-checked byte cursor over the source buffer
//! - byte classification ([`is_whitespace`], [`is_punctuation`],
//!   [`is_lexeme_boundary`])
//! - literal shape checks ([`is_integer`], [`is_identifier`])
//!
//! The token model and the scanner live in `rill_lexer`.

mod classify;
mod cursor;

pub use classify::{is_identifier, is_integer, is_lexeme_boundary, is_punctuation, is_whitespace};
pub use cursor::Cursor;
