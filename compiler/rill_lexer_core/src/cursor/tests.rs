use super::*;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some(b'a'));
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), Some(b'b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert!(cursor.is_eof());
}

#[test]
fn empty_source_starts_at_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.source_len(), 0);
}

// === Slicing ===

#[test]
fn slice_extracts_range() {
    let cursor = Cursor::new("let x");
    assert_eq!(cursor.slice(0, 3), "let");
    assert_eq!(cursor.slice(4, 5), "x");
}

#[test]
fn slice_from_uses_current_position() {
    let mut cursor = Cursor::new("while x");
    cursor.eat_candidate();
    assert_eq!(cursor.slice_from(0), "while");
}

// === eat_while ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), Some(b'a'));
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("aaaa");
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 4);
}

// === Whitespace ===

#[test]
fn eat_whitespace_counts_newlines() {
    let mut cursor = Cursor::new(" \n\t\r\n  x");
    assert_eq!(cursor.eat_whitespace(), 2);
    assert_eq!(cursor.current(), Some(b'x'));
}

#[test]
fn eat_whitespace_without_newlines() {
    let mut cursor = Cursor::new("   \t;");
    assert_eq!(cursor.eat_whitespace(), 0);
    assert_eq!(cursor.current(), Some(b';'));
}

#[test]
fn eat_whitespace_on_non_whitespace_is_noop() {
    let mut cursor = Cursor::new("x ");
    assert_eq!(cursor.eat_whitespace(), 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn lone_carriage_return_is_not_a_newline() {
    let mut cursor = Cursor::new("\r\r\r");
    assert_eq!(cursor.eat_whitespace(), 0);
    assert!(cursor.is_eof());
}

// === Candidates ===

#[test]
fn eat_candidate_stops_at_punctuation() {
    let mut cursor = Cursor::new("x=5");
    cursor.eat_candidate();
    assert_eq!(cursor.slice_from(0), "x");
    assert_eq!(cursor.current(), Some(b'='));
}

#[test]
fn eat_candidate_stops_at_whitespace() {
    let mut cursor = Cursor::new("print\nx");
    cursor.eat_candidate();
    assert_eq!(cursor.slice_from(0), "print");
}

#[test]
fn eat_candidate_keeps_non_ascii_whole() {
    let source = "caf\u{e9}!;";
    let mut cursor = Cursor::new(source);
    cursor.eat_candidate();
    assert_eq!(cursor.slice_from(0), "caf\u{e9}!");
}

// === Property Tests ===

mod proptest_cursor {
    use super::super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whitespace_newlines_match_naive_count(source in "[ \t\r\n]{0,64}") {
            let mut cursor = Cursor::new(&source);
            let newlines = cursor.eat_whitespace();
            let expected = source.bytes().filter(|&b| b == b'\n').count();
            prop_assert_eq!(newlines as usize, expected);
            prop_assert!(cursor.is_eof());
        }

        #[test]
        fn position_never_exceeds_length(source in "[a-z;=()+ \n]{0,64}", steps in 0usize..128) {
            let mut cursor = Cursor::new(&source);
            for _ in 0..steps {
                cursor.advance();
                prop_assert!(cursor.pos() <= cursor.source_len());
            }
        }
    }
}
