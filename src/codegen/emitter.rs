//! Output buffer with indentation tracking
//!
//! Generated code is split into a header, written once before translation
//! starts, and a body accumulated statement by statement.

use super::Sink;
use crate::errors::TeenyResult;

/// Accumulates generated code until it is committed to a [`Sink`]
#[derive(Debug, Clone)]
pub struct Emitter {
    header: String,
    body: String,
    /// Current indentation level
    indent_level: usize,
    /// Set after a line terminator, cleared once the prefix is written
    indent_pending: bool,
    /// One level of indentation
    indent_unit: String,
}

impl Emitter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            header: String::new(),
            body: String::new(),
            indent_level: 0,
            indent_pending: true,
            indent_unit: " ".repeat(indent_width),
        }
    }

    fn write_indent(&mut self) {
        if self.indent_pending {
            for _ in 0..self.indent_level {
                self.body.push_str(&self.indent_unit);
            }
            self.indent_pending = false;
        }
    }

    /// Append a fragment to the current line
    pub fn emit(&mut self, fragment: &str) {
        self.write_indent();
        self.body.push_str(fragment);
    }

    /// Append a fragment and terminate the line
    pub fn emit_line(&mut self, fragment: &str) {
        self.emit(fragment);
        self.body.push('\n');
        self.indent_pending = true;
    }

    /// Append a line to the header, ignoring indentation
    pub fn header_line(&mut self, line: &str) {
        self.header.push_str(line);
        self.header.push('\n');
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease the indentation; does nothing at level zero
    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Header followed by body
    pub fn finish(self) -> String {
        let mut code = self.header;
        code.push_str(&self.body);
        code
    }

    /// Write header and body to the sink in a single call
    pub fn commit<S: Sink + ?Sized>(self, sink: &mut S) -> TeenyResult<()> {
        let code = self.finish();
        sink.commit(&code)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_written_once_per_line() {
        let mut out = Emitter::default();
        out.increase_indent();
        out.emit("x");
        out.emit(" = ");
        out.emit("1");
        out.emit_line("");
        out.emit_line("y = 2");
        assert_eq!(out.body(), "    x = 1\n    y = 2\n");
    }

    #[test]
    fn test_indent_applied_lazily() {
        let mut out = Emitter::default();
        out.emit_line("while a<b:");
        // The level changes after the line ended, before the next line starts.
        out.increase_indent();
        out.emit_line("a = a+1");
        out.decrease_indent();
        out.emit_line("print(a)");
        assert_eq!(out.body(), "while a<b:\n    a = a+1\nprint(a)\n");
    }

    #[test]
    fn test_decrease_at_zero_is_noop() {
        let mut out = Emitter::default();
        out.decrease_indent();
        assert_eq!(out.indent_level(), 0);
        out.increase_indent();
        out.decrease_indent();
        out.decrease_indent();
        assert_eq!(out.indent_level(), 0);
    }

    #[test]
    fn test_header_bypasses_indentation() {
        let mut out = Emitter::new(2);
        out.increase_indent();
        out.header_line("import sys");
        out.emit_line("pass");
        assert_eq!(out.header(), "import sys\n");
        assert_eq!(out.finish(), "import sys\n  pass\n");
    }

    #[test]
    fn test_commit_writes_header_first() {
        let mut out = Emitter::default();
        out.emit_line("print(1)");
        out.header_line("import sys");
        let mut sink = String::new();
        out.commit(&mut sink).unwrap();
        assert_eq!(sink, "import sys\nprint(1)\n");
    }
}
