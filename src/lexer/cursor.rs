//! Forward-only read position over a source unit.
//!
//! The cursor sees one character (`current`) and one character of lookahead
//! (`peek`). Once the input is exhausted both return `None` on every call;
//! `advance` past the end is a no-op.

use super::source::is_line_terminator;

/// Start of a token: where it begins in the input and on which line/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub index: usize,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    /// Index of the current character.
    position: usize,
    /// Index of the lookahead character.
    read_position: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            chars: source.chars().collect(),
            position: 0,
            read_position: 1,
            line: 1,
            column: 1,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.read_position).copied()
    }

    pub fn advance(&mut self) {
        if self.at_eof() {
            return;
        }

        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    /// Called after a line terminator has been consumed.
    pub fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Moves up to, but not onto, the next `\r`/`\n` (or the end of input).
    pub fn skip_to_line_end(&mut self) {
        while let Some(ch) = self.current() {
            if is_line_terminator(ch) {
                break;
            }
            self.advance();
        }
    }

    pub fn mark(&self) -> Mark {
        Mark {
            index: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn slice(&self, from: usize, to: usize) -> String {
        let to = to.min(self.chars.len());
        let from = from.min(to);
        self.chars[from..to].iter().collect()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.chars.len()
    }
}
