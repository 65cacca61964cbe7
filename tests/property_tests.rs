//! Property-based tests for the scanner.
//!
//! Random PLB-flavoured input is generated with proptest and checked for:
//! 1. Losslessness: the raw slices of all tokens rebuild the input
//! 2. Every token's line text is the cached physical line it starts on
//! 3. Line numbers never decrease and the stream ends with a single EOF
//! 4. Exactly one diagnostic per illegal or unterminated token

use plb::lexer::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};
use proptest::prelude::*;

/// Source text drawn from the characters the scanner has rules for, plus a
/// few it rejects.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ a-zA-Z0-9_$#,:;()*/+<>=\".!@\t\r\n-]{0,200}").expect("valid regex")
}

fn scan(source: &str) -> Vec<Token> {
    let (tokens, _) = tokenize(source.to_string(), Some("prop.plb".to_string()));
    tokens
}

proptest! {
    #[test]
    fn raw_slices_rebuild_input(source in source_strategy()) {
        let rebuilt: String = scan(&source).iter().map(|token| token.raw.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn arbitrary_unicode_is_lossless(source in any::<String>()) {
        let rebuilt: String = scan(&source).iter().map(|token| token.raw.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn line_text_matches_line_cache(source in source_strategy()) {
        let lexer = Lexer::new(source, None);
        let lines = lexer.lines().clone();

        for token in lexer {
            let cached = lines.get(token.line()).cloned().unwrap_or_default();
            prop_assert_eq!(token.line_text.as_str(), cached.as_str());
        }
    }

    #[test]
    fn lines_are_monotonic_and_eof_is_last(source in source_strategy()) {
        let tokens = scan(&source);
        let eof_count = tokens.iter().filter(|token| token.kind == TokenKind::EOF).count();

        prop_assert_eq!(eof_count, 1);
        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        for window in tokens.windows(2) {
            prop_assert!(window[0].line() <= window[1].line());
        }
    }

    #[test]
    fn value_equals_raw_outside_literals_and_comments(source in source_strategy()) {
        for token in scan(&source) {
            if !token.is_one_of_many(&[TokenKind::Literal, TokenKind::NumericLiteral, TokenKind::Comment]) {
                prop_assert_eq!(&token.value, &token.raw);
            }
        }
    }

    #[test]
    fn one_diagnostic_per_bad_token(source in source_strategy()) {
        let (tokens, errors) = tokenize(source, None);
        let illegal = tokens.iter().filter(|token| token.kind == TokenKind::Illegal).count();
        let unterminated = tokens
            .iter()
            .filter(|token| {
                token.is_one_of_many(&[TokenKind::Literal, TokenKind::NumericLiteral])
                    && !(token.raw.len() >= 2 && token.raw.ends_with('"') && closes(&token.raw))
            })
            .count();

        prop_assert_eq!(errors.len(), illegal + unterminated);
    }
}

/// Whether a raw literal slice ends with a closing quote rather than an
/// escaped one.
fn closes(raw: &str) -> bool {
    let inner = &raw[1..];
    let trailing_quotes = inner.chars().rev().take_while(|&c| c == '"').count();
    trailing_quotes % 2 == 1
}
