#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};

/// 1-based line and column inside a named source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.file, self.line, self.column)
    }
}
