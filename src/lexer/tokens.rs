use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::Position;

lazy_static! {
    /// Reserved words, keyed by their upper-case spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("AND", TokenKind::And);
        map.insert("OR", TokenKind::Or);
        map.insert("NOT", TokenKind::Not);
        map.insert("FROM", TokenKind::Preposition);
        map.insert("TO", TokenKind::Preposition);
        map.insert("INTO", TokenKind::Preposition);
        map.insert("IN", TokenKind::Preposition);
        map.insert("BY", TokenKind::Preposition);
        map.insert("OF", TokenKind::Preposition);
        map.insert("WITH", TokenKind::Preposition);
        map.insert("USING", TokenKind::Preposition);
        map
    };
}

/// Classifies a scanned word, ignoring case.
pub fn lookup_identifier(identifier: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(identifier.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,

    Whitespace,
    Newline,
    BlankLine,

    Currency, // $
    Forcing,  // #

    Comma,     // , or :
    Semicolon, // ;
    OpenParen,
    CloseParen,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Power, // **

    Equals,        // =
    NotEquals,     // <>
    Less,          // <
    Greater,       // >
    LessEquals,    // <=
    GreaterEquals, // >=

    And,
    Or,
    Not,
    Preposition,

    Comment,
    Literal,
    NumericLiteral,

    DecimalNumber,
    OctalNumber,
    HexNumber,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::BlankLine => "NULLLINE",
            TokenKind::Currency => "CURRENCY",
            TokenKind::Forcing => "FORCING",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Power => "POWER",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::LessEquals => "LEQ",
            TokenKind::GreaterEquals => "GEQ",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Preposition => "PREPOSITION",
            TokenKind::Comment => "COMMENT",
            TokenKind::Literal => "LITERAL",
            TokenKind::NumericLiteral => "NUMERICLITERAL",
            TokenKind::DecimalNumber => "DNUM",
            TokenKind::OctalNumber => "ONUM",
            TokenKind::HexNumber => "XNUM",
        }
    }

    /// Whether producing this kind moves the scanner off the start of the line.
    pub fn marks_content(&self) -> bool {
        !matches!(
            self,
            TokenKind::EOF
                | TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::BlankLine
                | TokenKind::Comment
        )
    }

    pub fn is_line_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::BlankLine)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded content: quotes stripped from literals, comments trimmed.
    pub value: String,
    /// Exact source characters the token consumed.
    pub raw: String,
    pub position: Position,
    /// Physical line the token starts on, terminator included.
    pub line_text: Rc<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::Whitespace,
            TokenKind::Newline,
            TokenKind::BlankLine,
        ]) {
            write!(f, "[{} {:?}]", self.kind, self.value)
        } else {
            write!(f, "[{} '{}']", self.kind, self.value)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whitespace and line terminators: tokens a parser may skip over.
    pub fn is_trivia(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Whitespace,
            TokenKind::Newline,
            TokenKind::BlankLine,
        ])
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn source_name(&self) -> &str {
        &self.position.file
    }
}
