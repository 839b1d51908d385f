#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod trace;

pub use lexer::lexer::{tokenize, tokenize_strict, Scanner};
pub use lexer::tokens::{lookup_identifier, Token, TokenKind};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (with its newline, if
/// any) and the offset of `position` within that line. An offset equal to
/// the source length resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // `pos` is the end of input: point just past the last line's content.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders an error against the source it points into:
///
/// ```text
/// Error: UnrecognisedToken (Unrecognised character `@`)
/// -> main.monkey
///    |
/// 1 | let a = @;
///   | --------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return report;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    (&string[start..], start)
}
