//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic construction and rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidToken { token: '!' },
        position(1, 1),
        "!hello",
    );

    assert_eq!(error.get_error_name(), "InvalidToken");
    assert_eq!(error.code(), "Lexer");
    assert_eq!(error.message(), "invalid token");
}

#[test]
fn test_error_fields() {
    let error = Error::new(
        ErrorImpl::InvalidToken { token: '!' },
        position(3, 5),
        "1383!\n",
    );

    assert_eq!(error.file(), "test");
    assert_eq!(error.line(), 3);
    assert_eq!(error.column(), 5);
    assert_eq!(error.get_position().column, 5);
    assert_eq!(error.line_text(), "1383!");
    assert_eq!(error.kind(), &ErrorImpl::InvalidToken { token: '!' });
}

#[test]
fn test_error_strips_crlf() {
    let error = Error::new(ErrorImpl::UnterminatedLiteral, position(1, 1), "\"abc\r");

    assert_eq!(error.line_text(), "\"abc");
}

#[test]
fn test_error_render_first_column() {
    let error = Error::new(
        ErrorImpl::InvalidToken { token: '!' },
        position(1, 1),
        "!hello",
    );

    assert_eq!(
        error.to_string(),
        "Error Lexer: invalid token\nLocation: test 1:1\n!hello\n^"
    );
}

#[test]
fn test_error_render_caret_offset() {
    let error = Error::new(
        ErrorImpl::InvalidToken { token: '!' },
        position(1, 5),
        "1383!",
    );

    let rendered = error.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Error Lexer: invalid token");
    assert_eq!(lines[1], "Location: test 1:5");
    assert_eq!(lines[2], "1383!");
    assert_eq!(lines[3], "    ^");
}

#[test]
fn test_unterminated_literal_error() {
    let error = Error::new(ErrorImpl::UnterminatedLiteral, position(2, 10), "  MOVE \"abc");

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.code(), "Lexer");
    assert_eq!(error.message(), "unterminated literal");
}

#[test]
fn test_unreadable_source_error() {
    let error = Error::new(
        ErrorImpl::UnreadableSource {
            reason: "stream did not contain valid UTF-8".to_string(),
        },
        position(0, 0),
        "",
    );

    assert_eq!(error.code(), "Source");
    assert_eq!(
        error.message(),
        "unable to read source: stream did not contain valid UTF-8"
    );
    assert!(error.to_string().ends_with("\n^"));
}

#[test]
fn test_error_tip_none_for_unreadable_source() {
    let error = Error::new(
        ErrorImpl::UnreadableSource {
            reason: "No such file or directory (os error 2)".to_string(),
        },
        position(0, 0),
        "",
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::InvalidToken { token: '@' }, position(1, 1), "@");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('@')),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error>(_: &E) {}

    let error = Error::new(ErrorImpl::UnterminatedLiteral, position(1, 1), "\"");
    assert_std_error(&error);
}
