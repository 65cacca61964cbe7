//! Lexical analysis module for PLB source.
//!
//! This module contains the scanner that converts fixed-format source text
//! into a stream of tokens for parsing. It handles:
//!
//! - The physical line cache used for comments and diagnostics
//! - A forward-only cursor with one character of lookahead
//! - Column-sensitive comments and blank lines
//! - Numbers, quoted literals, identifiers and keywords
//! - Token position tracking for error reporting

pub mod cursor;
pub mod lexer;
pub mod source;
pub mod tokens;
