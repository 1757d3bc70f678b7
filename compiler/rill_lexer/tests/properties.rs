//! Property-based tests for the Rill lexer.
//!
//! These tests use proptest to generate arbitrary and structured sources and
//! verify the invariants every token stream must satisfy:
//! 1. The stream is non-empty and ends in exactly one `EndOfInput`
//! 2. The final line equals one plus the number of newlines
//! 3. Scanning is deterministic across fresh scanners
//! 4. A lexeme glued to punctuation always splits into two tokens

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use rill_lexer::{lex, lex_with_config, LexConfig, Scanner, TokenKind, KEYWORDS, PUNCTUATION};

// -- Strategies --

/// Arbitrary ASCII-heavy source, including bytes that never classify.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_;=()+$#!. \t\r\n]{0,80}").expect("valid regex")
}

/// A lexeme that always classifies: keyword, integer, or identifier.
fn valid_lexeme_strategy() -> impl Strategy<Value = (String, TokenKind)> {
    prop_oneof![
        prop::sample::select(KEYWORDS.to_vec()).prop_map(|(kw, kind)| (kw.to_string(), kind)),
        prop::string::string_regex("[0-9]{1,10}")
            .expect("valid regex")
            .prop_map(|s| (s, TokenKind::Integer)),
        prop::string::string_regex("[a-z][a-zA-Z0-9_]{0,10}")
            .expect("valid regex")
            .prop_filter("not a keyword", |s| rill_lexer::keyword(s).is_none())
            .prop_map(|s| (s, TokenKind::Identifier)),
    ]
}

fn punctuation_strategy() -> impl Strategy<Value = (u8, TokenKind)> {
    prop::sample::select(PUNCTUATION.to_vec())
}

proptest! {
    #[test]
    fn ends_with_exactly_one_eof(source in source_strategy()) {
        let tokens = Scanner::new(&source).generate_tokens();
        let last = tokens.last().expect("token stream is never empty");
        prop_assert_eq!(last.kind(), TokenKind::EndOfInput);
        let eof_count = tokens.iter().filter(|t| t.kind() == TokenKind::EndOfInput).count();
        prop_assert_eq!(eof_count, 1);
    }

    #[test]
    fn eof_line_counts_newlines(source in source_strategy()) {
        let tokens = Scanner::new(&source).generate_tokens();
        let newlines = source.bytes().filter(|&b| b == b'\n').count();
        let last = tokens.last().expect("token stream is never empty");
        prop_assert_eq!(last.line() as usize, newlines + 1);
    }

    #[test]
    fn lines_never_decrease(source in source_strategy()) {
        let tokens = Scanner::new(&source).generate_tokens();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line() <= pair[1].line());
        }
    }

    #[test]
    fn scanning_is_deterministic(source in source_strategy()) {
        let first = lex(&source);
        let second = lex(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lexeme_glued_to_punctuation_splits(
        (lexeme, kind) in valid_lexeme_strategy(),
        (punct, punct_kind) in punctuation_strategy(),
    ) {
        let source = format!("{lexeme}{}", punct as char);
        let tokens = Scanner::new(&source).generate_tokens();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[0].kind(), kind);
        prop_assert_eq!(tokens[0].lexeme(), lexeme.as_str());
        prop_assert_eq!(tokens[1].kind(), punct_kind);
        prop_assert_eq!(tokens[2].kind(), TokenKind::EndOfInput);
    }

    #[test]
    fn error_policy_only_adds_error_tokens(source in source_strategy()) {
        let dropped = lex(&source);
        let surfaced = lex_with_config(&source, &LexConfig::with_error_tokens());
        let without_errors: Vec<_> = surfaced
            .tokens
            .iter()
            .filter(|t| t.kind() != TokenKind::Error)
            .cloned()
            .collect();
        prop_assert_eq!(&dropped.tokens, &without_errors);
        prop_assert_eq!(&dropped.errors, &surfaced.errors);
        prop_assert_eq!(
            surfaced.tokens.len() - dropped.tokens.len(),
            surfaced.errors.len()
        );
    }

    #[test]
    fn lexemes_appear_in_source_order(source in source_strategy()) {
        let output = lex_with_config(&source, &LexConfig::with_error_tokens());
        let mut offset = 0;
        for token in output.tokens.iter().filter(|t| t.kind() != TokenKind::EndOfInput) {
            let found = source[offset..].find(token.lexeme()).expect("lexeme comes from source");
            offset += found + token.lexeme().len();
        }
    }
}
