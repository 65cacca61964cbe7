use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Diagnostic produced while reading or scanning a source unit.
///
/// Carries everything needed to point at the offending character without
/// going back to the source: the file, the 1-based line and column, and the
/// text of the physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    line_text: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, line_text: &str) -> Self {
        Error {
            internal_error: error_impl,
            position,
            line_text: line_text.trim_end_matches(['\r', '\n']).to_string(),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Component that raised the error.
    pub fn code(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { .. } => "Source",
            ErrorImpl::InvalidToken { .. } | ErrorImpl::UnterminatedLiteral => "Lexer",
        }
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn file(&self) -> &str {
        &self.position.file
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnterminatedLiteral => "UnterminatedLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { .. } => ErrorTip::None,
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a token here",
                token.escape_debug()
            )),
            ErrorImpl::UnterminatedLiteral => ErrorTip::Suggestion(String::from(
                "Close the literal with `\"` before the end of the line",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        /*
            Error Lexer: invalid token
            Location: orders.plb 3:5
            1383!
                ^
        */
        writeln!(f, "Error {}: {}", self.code(), self.message())?;
        writeln!(f, "Location: {}", self.position)?;
        writeln!(f, "{}", self.line_text)?;
        let padding = self.position.column.saturating_sub(1) as usize;
        write!(f, "{:>width$}", "^", width = padding + 1)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unable to read source: {reason}")]
    UnreadableSource { reason: String },
    #[error("invalid token")]
    InvalidToken { token: char },
    #[error("unterminated literal")]
    UnterminatedLiteral,
}
