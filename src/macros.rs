//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LOOKAHEAD!` - Builds a one- or two-character operator token
//!
//! These macros reduce boilerplate in the scanner's dispatch table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, String::from("42"));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Disambiguates an operator that may be followed by a second character.
///
/// If the scanner's lookahead is `$next`, the lookahead is consumed and the
/// token is `$double` with both characters as its value. Otherwise the token
/// is `$single` with just `$first`. Either way the scanner is left on the
/// last character of the operator; the caller's trailing advance moves past
/// it.
///
/// # Example
///
/// ```ignore
/// b'=' => MK_LOOKAHEAD!(self, ch, b'=', TokenKind::Equals, TokenKind::Assign),
/// ```
#[macro_export]
macro_rules! MK_LOOKAHEAD {
    ($scanner:expr, $first:expr, $next:literal, $double:expr, $single:expr) => {{
        let first = char::from($first);
        if $scanner.peek_char() == Some($next) {
            $scanner.read_char();
            $crate::MK_TOKEN!($double, format!("{}{}", first, char::from($next)))
        } else {
            $crate::MK_TOKEN!($single, String::from(first))
        }
    }};
}
