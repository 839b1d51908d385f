//! Nested BEGIN/END tracing for recursive consumers of the token stream.
//!
//! The indent depth lives in a [`Tracer`] value that the caller threads
//! through by `&mut`, so two traced runs never share state.

use tracing::trace;

const INDENT_PLACEHOLDER: &str = "\t";

#[derive(Debug, Default)]
pub struct Tracer {
    level: usize,
    lines: Vec<String>,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Every line emitted so far, indentation included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Opens a traced section and returns `msg` so the caller can hand it
    /// back to [`Tracer::untrace`].
    pub fn trace<'a>(&mut self, msg: &'a str) -> &'a str {
        self.level += 1;
        self.print(&format!("BEGIN {}", msg));
        msg
    }

    pub fn untrace(&mut self, msg: &str) {
        self.print(&format!("END {}", msg));
        self.level = self.level.saturating_sub(1);
    }

    fn indent(&self) -> String {
        INDENT_PLACEHOLDER.repeat(self.level.saturating_sub(1))
    }

    fn print(&mut self, line: &str) {
        let line = format!("{}{}", self.indent(), line);
        trace!(target: "monkey_lexer::trace", "{}", line);
        self.lines.push(line);
    }
}
