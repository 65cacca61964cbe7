//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The decoded token value
/// * `$raw` - The source slice the token was read from
/// * `$position` - Line, column and file of the first character
/// * `$line_text` - The cached physical line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::DecimalNumber, "42".to_string(), "42".to_string(), position, line);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $raw:expr, $position:expr, $line_text:expr) => {
        Token {
            kind: $kind,
            value: $value,
            raw: $raw,
            position: $position,
            line_text: $line_text,
        }
    };
}
