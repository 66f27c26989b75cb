#![allow(missing_docs)]

use jsonscan::{LexErrorKind, Position, SourceText};
use rstest::rstest;

/// Position of the last token in `src`.
fn last_token_position(src: &str) -> Position {
    let text = SourceText::new(src);
    let tokens = text.tokens().expect("input scans");
    tokens
        .last()
        .expect("at least one token")
        .position()
}

#[rstest]
#[case::same_line("[ ]", 2, 1, 3)]
#[case::after_lf("[\n]", 2, 2, 1)]
#[case::after_crlf("[\r\n]", 3, 2, 1)]
#[case::after_lone_cr("[\r]", 2, 2, 1)]
#[case::after_lf_cr("[\n\r]", 3, 3, 1)]
#[case::after_cr_cr_lf("[\r\r\n]", 4, 3, 1)]
#[case::indented_after_crlf("[\r\n\t  ]", 6, 2, 4)]
#[case::after_multibyte_string("[\"Grüße\",\"日本\"]", 13, 1, 14)]
fn token_positions(
    #[case] src: &str,
    #[case] offset: usize,
    #[case] line: usize,
    #[case] column: usize,
) {
    assert_eq!(
        last_token_position(src),
        Position {
            offset,
            line,
            column
        }
    );
}

#[rstest]
#[case::eof_on_second_line("[\n\"", 3, 2, 2)]
#[case::eof_after_crlf("\r\n\"abc", 6, 2, 5)]
#[case::control_on_third_line("\n\r\"a\u{7}\"", 4, 3, 3)]
fn error_positions(
    #[case] src: &str,
    #[case] offset: usize,
    #[case] line: usize,
    #[case] column: usize,
) {
    let text = SourceText::new(src);
    let err = text.tokens().unwrap_err();
    assert_eq!(err.offset(), offset);
    assert_eq!((err.line(), err.column()), (line, column));
    assert!(text.position(err.offset()).is_some());
}

#[test]
fn every_offset_is_resolvable() {
    let text = SourceText::new("{\r\n \"a\" :\r[\n\rtrue ]}\n");
    for offset in 0..=text.len() {
        let position = text.position(offset).expect("offset within the text");
        assert!(position.line >= 1 && position.line <= text.line_count());
        assert!(position.column >= 1);
    }
    assert_eq!(text.position(text.len() + 1), None);
}

#[test]
fn eof_offset_is_one_past_the_end() {
    let text = SourceText::new("[\"é");
    let err = text.tokens().unwrap_err();
    assert_eq!(err.kind(), &LexErrorKind::UnexpectedEof);
    assert_eq!(err.offset(), 3);
    assert_eq!(err.column(), 4);
}
