//! Token types for the Rill lexer.
//!
//! A [`Token`] is an immutable `(kind, lexeme, line)` triple. Rendering via
//! [`fmt::Display`] produces the diagnostic form consumed by `rill lex`:
//! punctuation and keywords print their kind name, literals print
//! `NAME lexeme`.

use std::fmt;

/// Token kinds for Rill.
///
/// `If`, `Then`, `Else` and `String` are reserved: nothing in the scanner
/// produces them yet. `Error` is produced only under
/// [`UnknownLexemePolicy::ErrorToken`](crate::UnknownLexemePolicy::ErrorToken).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Punctuation
    Semicolon,
    Equals,
    LeftParen,
    RightParen,
    Plus,

    // Literals
    Identifier,
    Integer,
    String,

    // Keywords
    Print,
    Let,
    While,
    If,
    Then,
    Else,

    EndOfInput,
    Error,
}

impl TokenKind {
    /// Diagnostic name used when rendering tokens.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Semicolon => "SEMI",
            TokenKind::Equals => "EQUALS",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::String => "STRING",
            TokenKind::Print => "PRINT",
            TokenKind::Let => "LET",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Error => "ERROR",
        }
    }

    /// Whether the rendered form includes the lexeme after the name.
    pub const fn renders_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Integer | TokenKind::String | TokenKind::Error
        )
    }

    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon
                | TokenKind::Equals
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Plus
        )
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Print
                | TokenKind::Let
                | TokenKind::While
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme and the 1-based line it starts on.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
}

impl Token {
    /// Lexeme carried by the end-of-input token.
    pub const EOF_LEXEME: &'static str = "EOF";

    /// Create a token. No validation: the scanner guarantees the lexeme
    /// matches the kind.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Create the terminal end-of-input token.
    pub fn end_of_input(line: u32) -> Self {
        Token::new(TokenKind::EndOfInput, Self::EOF_LEXEME, line)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.renders_lexeme() {
            write!(f, "{} {}", self.kind.name(), self.lexeme)
        } else {
            f.write_str(self.kind.name())
        }
    }
}

/// Display adapter rendering a token sequence as `[A, B, EOF]`.
#[derive(Clone, Copy, Debug)]
pub struct RenderedTokens<'a>(pub &'a [Token]);

impl fmt::Display for RenderedTokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token}")?;
        }
        f.write_str("]")
    }
}

/// Render a token sequence as a bracketed, comma-separated list.
pub fn render_tokens(tokens: &[Token]) -> String {
    RenderedTokens(tokens).to_string()
}
