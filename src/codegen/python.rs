//! Python back end
//!
//! Generates Python 3 source. Blocks are opened with `:` and delimited by
//! the emitter's indentation.

use super::Target;

/// Python target
#[derive(Debug, Clone, Copy, Default)]
pub struct Python;

impl Target for Python {
    fn language_name(&self) -> &'static str {
        "Python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn preamble(&self) -> &'static [&'static str] {
        &["import sys"]
    }

    fn print_open(&self) -> &'static str {
        "print("
    }

    fn print_close(&self) -> &'static str {
        ")"
    }

    fn string_literal(&self, text: &str) -> String {
        format!("\"{}\"", text)
    }

    fn if_open(&self) -> &'static str {
        "if "
    }

    fn while_open(&self) -> &'static str {
        "while "
    }

    fn def_open(&self) -> &'static str {
        "def "
    }

    fn block_open(&self) -> &'static str {
        ":"
    }

    fn else_line(&self) -> &'static str {
        "else:"
    }

    fn assign(&self) -> &'static str {
        " = "
    }

    fn read_number(&self) -> &'static str {
        "float(input())"
    }

    fn return_open(&self) -> &'static str {
        "return "
    }

    fn logical_and(&self) -> &'static str {
        " and "
    }

    fn logical_or(&self) -> &'static str {
        " or "
    }

    fn logical_not(&self) -> &'static str {
        "not "
    }

    fn empty_body(&self) -> &'static str {
        "pass"
    }
}
