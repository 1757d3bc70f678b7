//! Lexer for Rill.
//!
//! Turns a source buffer into an ordered list of [`Token`]s in one
//! synchronous pass. Byte-level navigation and classification come from
//! `rill_lexer_core`; this crate owns the token model, the keyword and
//! punctuation tables, and the scanning loop.
//!
//! ```
//! let output = rill_lexer::lex("let x = 5 ;");
//! assert_eq!(
//!     rill_lexer::render_tokens(&output.tokens),
//!     "[LET, IDENT x, EQUALS, INT 5, SEMI, EOF]"
//! );
//! ```

mod config;
mod keywords;
mod lex_error;
mod scanner;
mod token;

pub use config::{LexConfig, UnknownLexemePolicy};
pub use keywords::{keyword, punctuation, KEYWORDS, PUNCTUATION};
pub use lex_error::{LexError, LexErrorKind, Span};
pub use scanner::{classify, Scanner};
pub use token::{render_tokens, RenderedTokens, Token, TokenKind};

/// Result of lexing: tokens plus diagnostics for unrecognized lexemes.
///
/// `errors` never influences `tokens`; under
/// [`UnknownLexemePolicy::Drop`] the two are simply disjoint.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render the token list as `[A, B, EOF]`.
    pub fn render(&self) -> String {
        render_tokens(&self.tokens)
    }
}

/// Lex source code with the default configuration.
pub fn lex(source: &str) -> LexOutput {
    lex_with_config(source, &LexConfig::default())
}

/// Lex source code with an explicit configuration.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), policy = ?config.unknown_lexemes))]
pub fn lex_with_config(source: &str, config: &LexConfig) -> LexOutput {
    Scanner::with_config(source, *config).finish()
}
