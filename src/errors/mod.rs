//! Error types and error handling for the scanner.
//!
//! This module defines the diagnostics produced while reading and
//! tokenizing a source unit:
//!
//! - Error structures with file, line, column and line text
//! - Specific error variants for unreadable sources and bad tokens
//! - The caret-annotated rendering shown to users

pub mod errors;

#[cfg(test)]
mod tests;
