use std::{fs, io::Read, path::Path, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::{Cursor, Mark},
    source::SourceLines,
    tokens::{lookup_identifier, Token, TokenKind},
};

lazy_static! {
    static ref NUMERIC_LITERAL: Regex = Regex::new(r"^[-.0-9]*$").unwrap();
}

/// Pull-based scanner over one source unit.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. The only
/// state that survives between calls, apart from the cursor, is whether the
/// current line has produced a content token yet: a `.`, `*` or `+` seen
/// before any content opens a whole-line comment, and a line terminator seen
/// before any content is a blank line.
pub struct Lexer {
    cursor: Cursor,
    lines: SourceLines,
    file: Rc<String>,
    line_has_content: bool,
    errors: Vec<Error>,
    emitted_eof: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let lines = SourceLines::new(&source);
        debug!(file = %file_name, lines = lines.len(), "created lexer");

        Lexer {
            cursor: Cursor::new(&source),
            lines,
            file: file_name,
            line_has_content: false,
            errors: vec![],
            emitted_eof: false,
        }
    }

    /// Reads the whole source up front. Fails if the reader errors or the
    /// content is not UTF-8.
    pub fn from_reader<R: Read>(mut reader: R, file: Option<String>) -> Result<Lexer, Error> {
        let mut source = String::new();

        if let Err(err) = reader.read_to_string(&mut source) {
            return Err(unreadable(err, file));
        }

        Ok(Lexer::new(source, file))
    }

    pub fn from_path(path: &Path) -> Result<Lexer, Error> {
        let file = Some(path.to_string_lossy().into_owned());

        match fs::read_to_string(path) {
            Ok(source) => Ok(Lexer::new(source, file)),
            Err(err) => Err(unreadable(err, file)),
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn lines(&self) -> &SourceLines {
        &self.lines
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn at_line_start(&self) -> bool {
        !self.line_has_content
    }

    /// Produces the next token, plus the diagnostic raised while producing
    /// it, if any. Once the input is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> (Token, Option<Error>) {
        let start = self.cursor.mark();

        let Some(ch) = self.cursor.current() else {
            return (self.make_token(TokenKind::EOF, start), None);
        };

        let (token, error) = match ch {
            '.' | '*' | '+' if !self.line_has_content => (self.read_comment(start), None),
            ' ' | '\t' => (self.read_whitespace(start), None),
            '\r' | '\n' => (self.read_line_end(start), None),
            '$' if !self.cursor.peek().is_some_and(is_letter) => {
                (self.single(TokenKind::Currency, start), None)
            }
            '#' => (self.single(TokenKind::Forcing, start), None),
            ',' | ':' => (self.single(TokenKind::Comma, start), None),
            ';' => (self.single(TokenKind::Semicolon, start), None),
            '(' => (self.single(TokenKind::OpenParen, start), None),
            ')' => (self.single(TokenKind::CloseParen, start), None),
            '*' => {
                if self.cursor.peek() == Some('*') {
                    (self.double(TokenKind::Power, start), None)
                } else {
                    (self.single(TokenKind::Asterisk, start), None)
                }
            }
            '/' => (self.single(TokenKind::Slash, start), None),
            '+' => (self.single(TokenKind::Plus, start), None),
            '-' => (self.single(TokenKind::Minus, start), None),
            '<' => match self.cursor.peek() {
                Some('=') => (self.double(TokenKind::LessEquals, start), None),
                Some('>') => (self.double(TokenKind::NotEquals, start), None),
                _ => (self.single(TokenKind::Less, start), None),
            },
            '>' => match self.cursor.peek() {
                Some('=') => (self.double(TokenKind::GreaterEquals, start), None),
                _ => (self.single(TokenKind::Greater, start), None),
            },
            '=' => (self.single(TokenKind::Equals, start), None),
            '"' => self.read_literal(start),
            c if c.is_ascii_digit() => (self.read_number(start), None),
            c if is_identifier_start(c) => (self.read_identifier(start), None),
            c => self.illegal(c, start),
        };

        if token.kind.marks_content() {
            self.line_has_content = true;
        }

        if let Some(error) = &error {
            debug!(
                code = error.code(),
                line = error.line(),
                column = error.column(),
                "{}",
                error.message()
            );
            self.errors.push(error.clone());
        }

        trace!(kind = %token.kind, line = token.position.line, column = token.position.column, "token");
        (token, error)
    }

    fn make_token(&self, kind: TokenKind, start: Mark) -> Token {
        let raw = self.cursor.slice(start.index, self.cursor.position());
        self.make_token_with_value(kind, raw.clone(), raw, start)
    }

    fn make_token_with_value(&self, kind: TokenKind, value: String, raw: String, start: Mark) -> Token {
        MK_TOKEN!(
            kind,
            value,
            raw,
            Position::new(start.line, start.column, Rc::clone(&self.file)),
            self.line_text(start.line)
        )
    }

    fn line_text(&self, line: u32) -> Rc<String> {
        self.lines.get(line).cloned().unwrap_or_default()
    }

    fn single(&mut self, kind: TokenKind, start: Mark) -> Token {
        self.cursor.advance();
        self.make_token(kind, start)
    }

    fn double(&mut self, kind: TokenKind, start: Mark) -> Token {
        self.cursor.advance();
        self.cursor.advance();
        self.make_token(kind, start)
    }

    /// Whole-line comment. The text comes from the line cache; the cursor is
    /// then moved past the rest of the line and its terminator.
    fn read_comment(&mut self, start: Mark) -> Token {
        let value = self.lines.text(start.line).trim().to_string();

        self.cursor.skip_to_line_end();
        let ended_line = self.cursor.current().is_some();
        self.cursor.advance();

        let raw = self.cursor.slice(start.index, self.cursor.position());
        let token = self.make_token_with_value(TokenKind::Comment, value, raw, start);

        if ended_line {
            self.cursor.new_line();
        }
        self.line_has_content = false;

        token
    }

    fn read_whitespace(&mut self, start: Mark) -> Token {
        while matches!(self.cursor.peek(), Some(' ' | '\t')) {
            self.cursor.advance();
        }
        self.cursor.advance();

        self.make_token(TokenKind::Whitespace, start)
    }

    fn read_line_end(&mut self, start: Mark) -> Token {
        let kind = if self.line_has_content {
            TokenKind::Newline
        } else {
            TokenKind::BlankLine
        };

        let token = self.single(kind, start);
        self.cursor.new_line();
        self.line_has_content = false;

        token
    }

    /// Quoted literal. `""` inside the quotes stands for one `"`. A literal
    /// still open at the end of the line or input is returned as far as it
    /// got, together with an `UnterminatedLiteral` diagnostic.
    fn read_literal(&mut self, start: Mark) -> (Token, Option<Error>) {
        self.cursor.advance();

        let mut kind = match self.cursor.current() {
            Some(c) if c == '-' || c == '.' || c.is_ascii_digit() => TokenKind::NumericLiteral,
            _ => TokenKind::Literal,
        };

        let mut value = String::new();
        let mut terminated = false;

        while let Some(ch) = self.cursor.current() {
            match ch {
                '"' if self.cursor.peek() == Some('"') => {
                    value.push('"');
                    self.cursor.advance();
                    self.cursor.advance();
                }
                '"' => {
                    self.cursor.advance();
                    terminated = true;
                    break;
                }
                '\r' | '\n' => break,
                _ => {
                    value.push(ch);
                    self.cursor.advance();
                }
            }
        }

        if kind == TokenKind::NumericLiteral && !NUMERIC_LITERAL.is_match(&value) {
            kind = TokenKind::Literal;
        }

        let raw = self.cursor.slice(start.index, self.cursor.position());
        let token = self.make_token_with_value(kind, value, raw, start);

        if terminated {
            (token, None)
        } else {
            let error = self.diagnostic(ErrorImpl::UnterminatedLiteral, start);
            (token, Some(error))
        }
    }

    /// Hex (`0x...`), octal (`0` followed only by `0-7`) or decimal run.
    fn read_number(&mut self, start: Mark) -> Token {
        if self.cursor.current() == Some('0') && matches!(self.cursor.peek(), Some('x' | 'X')) {
            self.cursor.advance();
            self.cursor.advance();
            while self.cursor.current().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.cursor.advance();
            }
            return self.make_token(TokenKind::HexNumber, start);
        }

        while self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }

        let token = self.make_token(TokenKind::DecimalNumber, start);
        if is_octal(&token.raw) {
            Token {
                kind: TokenKind::OctalNumber,
                ..token
            }
        } else {
            token
        }
    }

    fn read_identifier(&mut self, start: Mark) -> Token {
        while self.cursor.current().is_some_and(is_identifier_char) {
            self.cursor.advance();
        }

        let token = self.make_token(TokenKind::Identifier, start);
        Token {
            kind: lookup_identifier(&token.raw),
            ..token
        }
    }

    fn illegal(&mut self, ch: char, start: Mark) -> (Token, Option<Error>) {
        let token = self.single(TokenKind::Illegal, start);
        let error = self.diagnostic(ErrorImpl::InvalidToken { token: ch }, start);

        (token, Some(error))
    }

    fn diagnostic(&self, error_impl: ErrorImpl, start: Mark) -> Error {
        Error::new(
            error_impl,
            Position::new(start.line, start.column, Rc::clone(&self.file)),
            self.lines.text(start.line),
        )
    }
}

/// Yields every token up to and including the first `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }

        let (token, _) = self.next_token();
        if token.kind == TokenKind::EOF {
            self.emitted_eof = true;
        }

        Some(token)
    }
}

fn unreadable(err: std::io::Error, file: Option<String>) -> Error {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    Error::new(
        ErrorImpl::UnreadableSource {
            reason: err.to_string(),
        },
        Position::new(0, 0, file),
        "",
    )
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_identifier_start(ch: char) -> bool {
    is_letter(ch) || ch == '_' || ch == '$'
}

fn is_identifier_char(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

fn is_octal(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0') && digits.chars().all(|c| ('0'..='7').contains(&c))
}

/// Scans a whole source unit, collecting tokens (ending with `EOF`) and the
/// diagnostics raised along the way.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);
    let tokens = lex.by_ref().collect::<Vec<Token>>();

    (tokens, lex.errors)
}
