use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("macro", TokenKind::Macro);
        map
    };
}

/// Resolves an identifier-shaped spelling to its reserved kind, or
/// [`TokenKind::Ident`] when it is not a keyword.
pub fn lookup_identifier(identifier: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(identifier)
        .copied()
        .unwrap_or(TokenKind::Ident)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    Ident,
    Int,
    String,

    Assign,    // =
    Equals,    // ==
    Bang,      // !
    NotEquals, // !=

    Plus,
    Minus,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
    Macro,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Equals => "==",
            TokenKind::Bang => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Macro => "MACRO",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Macro
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified lexeme. Owns its text; holds no reference back into the
/// source it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_value() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{} ()", self.kind)
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Whether the lexeme is interesting on its own, as opposed to being
    /// fully implied by the kind.
    pub fn carries_value(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Illegal,
        ])
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
