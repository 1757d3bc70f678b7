//! Scanner configuration.

/// What the scanner does with a candidate lexeme it cannot classify.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum UnknownLexemePolicy {
    /// Emit nothing and keep scanning.
    #[default]
    Drop,
    /// Emit a [`TokenKind::Error`](crate::TokenKind::Error) token carrying the
    /// offending text and keep scanning.
    ErrorToken,
}

impl UnknownLexemePolicy {
    /// Parse the CLI spelling (`drop` or `error`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "drop" => Some(Self::Drop),
            "error" => Some(Self::ErrorToken),
            _ => None,
        }
    }
}

/// Options for a single scan.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LexConfig {
    pub unknown_lexemes: UnknownLexemePolicy,
}

impl LexConfig {
    /// Config that surfaces unclassifiable lexemes as error tokens.
    pub fn with_error_tokens() -> Self {
        Self {
            unknown_lexemes: UnknownLexemePolicy::ErrorToken,
        }
    }
}
