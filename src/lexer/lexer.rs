use std::{iter::FusedIterator, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_LOOKAHEAD, MK_TOKEN,
};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Pull-based scanner over a single source string.
///
/// The scanner works on bytes. `ch` is the byte under the cursor, or `None`
/// once the cursor has moved past the last byte. `read_position` is always
/// one past `position`, and `position` never exceeds `input.len()`.
#[derive(Debug, Clone)]
pub struct Scanner {
    input: String,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl Scanner {
    pub fn new(input: impl Into<String>) -> Scanner {
        let mut scanner = Scanner {
            input: input.into(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        scanner.read_char();
        scanner
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// the `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.next_spanned().1
    }

    /// Like [`Scanner::next_token`], but also returns the byte offset where
    /// the token starts.
    pub fn next_spanned(&mut self) -> (usize, Token) {
        self.skip_whitespace();

        let start = self.position;
        let token = self.scan();

        trace!(kind = %token.kind, value = %token.value, offset = start, "scanned token");
        (start, token)
    }

    fn scan(&mut self) -> Token {
        let Some(ch) = self.ch else {
            return Token::eof();
        };

        let token = match ch {
            b'=' => MK_LOOKAHEAD!(self, ch, b'=', TokenKind::Equals, TokenKind::Assign),
            b'!' => MK_LOOKAHEAD!(self, ch, b'=', TokenKind::NotEquals, TokenKind::Bang),

            b'+' => single(TokenKind::Plus, ch),
            b'-' => single(TokenKind::Minus, ch),
            b'*' => single(TokenKind::Asterisk, ch),
            b'/' => single(TokenKind::Slash, ch),
            b'<' => single(TokenKind::LessThan, ch),
            b'>' => single(TokenKind::GreaterThan, ch),

            b',' => single(TokenKind::Comma, ch),
            b';' => single(TokenKind::Semicolon, ch),
            b'(' => single(TokenKind::OpenParen, ch),
            b')' => single(TokenKind::CloseParen, ch),
            b'{' => single(TokenKind::OpenCurly, ch),
            b'}' => single(TokenKind::CloseCurly, ch),

            b'"' => MK_TOKEN!(TokenKind::String, self.read_string()),

            // Identifiers and integers leave the cursor on the first byte
            // after the run, so they skip the trailing advance.
            c if is_letter(c) => {
                let identifier = self.read_identifier();
                return MK_TOKEN!(lookup_identifier(&identifier), identifier);
            }
            c if c.is_ascii_digit() => {
                return MK_TOKEN!(TokenKind::Int, self.read_number());
            }

            c if c.is_ascii() => single(TokenKind::Illegal, c),
            _ => MK_TOKEN!(TokenKind::Illegal, self.read_wide_char()),
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }

        self.ch = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while matches!(self.ch, Some(c) if is_letter(c)) {
            self.read_char();
        }
        self.input[position..self.position].to_string()
    }

    fn read_number(&mut self) -> String {
        let position = self.position;
        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[position..self.position].to_string()
    }

    /// Reads a string literal verbatim, leaving the cursor on the closing
    /// quote. An unterminated literal runs to the end of input.
    fn read_string(&mut self) -> String {
        let position = self.position + 1;
        loop {
            self.read_char();
            if matches!(self.ch, Some(b'"') | None) {
                break;
            }
        }
        self.input[position..self.position].to_string()
    }

    /// Consumes a multi-byte UTF-8 character as a whole, leaving the cursor
    /// on its last byte.
    fn read_wide_char(&mut self) -> String {
        let c = self
            .input
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        for _ in 1..c.len_utf8() {
            self.read_char();
        }
        String::from(c)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner {}

fn single(kind: TokenKind, ch: u8) -> Token {
    MK_TOKEN!(kind, String::from(char::from(ch)))
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole source. The last token is always `Eof`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens: Vec<Token> = scanner.by_ref().collect();
    tokens.push(scanner.next_token());

    debug!(count = tokens.len(), "tokenized source");
    tokens
}

/// Scans the whole source, failing on the first illegal character.
///
/// Unterminated string literals are still accepted, the same as in
/// [`tokenize`].
pub fn tokenize_strict(
    source: impl Into<String>,
    file: Option<String>,
) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let (start, token) = scanner.next_spanned();
        match token.kind {
            TokenKind::Illegal => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: token.value },
                    Position(start as u32, Rc::clone(&file_name)),
                ));
            }
            TokenKind::Eof => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    debug!(count = tokens.len(), file = %file_name, "tokenized source");
    Ok(tokens)
}
