//! Lexical analysis module.
//!
//! This module contains the scanner that converts Monkey source code into
//! a stream of tokens for a parser. It handles:
//!
//! - One- and two-character operators
//! - Keywords and identifiers
//! - Integer and string literals
//! - Whitespace skipping and end of input

pub mod lexer;
pub mod tokens;
