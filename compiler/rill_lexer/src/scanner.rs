//! Single-pass maximal-munch scanner.
//!
//! Each step looks at the byte under the cursor and takes the first matching
//! rule:
//!
//! 1. whitespace: skipped, `\n` bumps the line counter
//! 2. punctuation (`; = ( ) +`): one token per byte
//! 3. anything else: the maximal run up to the next whitespace, punctuation,
//!    or EOF becomes a candidate, classified as a whole
//!
//! Candidates are classified keyword first, then integer, then identifier.
//! A candidate matching none of them is unrecognized and handled according to
//! [`UnknownLexemePolicy`]. The scan always ends with one `EndOfInput` token.

use rill_lexer_core::{is_identifier, is_integer, is_whitespace, Cursor};

use crate::keywords;
use crate::lex_error::{LexError, Span};
use crate::{LexConfig, LexOutput, Token, TokenKind, UnknownLexemePolicy};

/// Scanner over one source buffer.
///
/// Consumed by [`generate_tokens()`](Self::generate_tokens) or
/// [`finish()`](Self::finish); scanning another buffer needs a new scanner.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Current 1-based line.
    line: u32,
    config: LexConfig,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
            config,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole buffer and return the token sequence.
    ///
    /// The result is never empty and always ends with exactly one
    /// [`TokenKind::EndOfInput`] token.
    pub fn generate_tokens(self) -> Vec<Token> {
        self.finish().tokens
    }

    /// Scan the whole buffer and return tokens together with diagnostics.
    pub fn finish(mut self) -> LexOutput {
        while let Some(byte) = self.cursor.current() {
            if is_whitespace(byte) {
                let newlines = self.cursor.eat_whitespace();
                self.line = self.line.saturating_add(newlines);
            } else if let Some(kind) = keywords::punctuation(byte) {
                let start = self.cursor.pos();
                self.cursor.advance();
                let lexeme = self.cursor.slice_from(start);
                self.tokens.push(Token::new(kind, lexeme, self.line));
            } else {
                self.scan_candidate();
            }
        }

        self.tokens.push(Token::end_of_input(self.line));
        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan complete"
        );

        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Consume and classify one maximal-munch candidate.
    fn scan_candidate(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_candidate();
        let text = self.cursor.slice_from(start);

        match classify(text) {
            Some(kind) => self.tokens.push(Token::new(kind, text, self.line)),
            None => self.unrecognized(text, Span::new(start, self.cursor.pos())),
        }
    }

    #[cold]
    fn unrecognized(&mut self, text: &str, span: Span) {
        tracing::trace!(text, line = self.line, %span, "unrecognized lexeme");
        self.errors
            .push(LexError::unrecognized_lexeme(text, self.line, span));
        if self.config.unknown_lexemes == UnknownLexemePolicy::ErrorToken {
            self.tokens
                .push(Token::new(TokenKind::Error, text, self.line));
        }
    }
}

/// Classify a whole candidate: keyword, then integer, then identifier.
///
/// Returns `None` for text matching none of them.
pub fn classify(text: &str) -> Option<TokenKind> {
    if let Some(kind) = keywords::keyword(text) {
        Some(kind)
    } else if is_integer(text) {
        Some(TokenKind::Integer)
    } else if is_identifier(text) {
        Some(TokenKind::Identifier)
    } else {
        None
    }
}
