//! Code generation for Teeny
//!
//! The translator never spells target syntax itself: every fragment comes
//! from a [`Target`], is accumulated by the [`Emitter`] and finally handed to
//! a [`Sink`].

mod emitter;
mod python;
mod sink;

pub use emitter::Emitter;
pub use python::Python;
pub use sink::{FileSink, Sink, WriterSink};

/// Trait for target-language back ends
///
/// Fragments are written verbatim, so each one carries its own spacing.
pub trait Target {
    /// Get the name of the target language
    fn language_name(&self) -> &'static str;

    /// Get the file extension for the target language
    fn file_extension(&self) -> &'static str;

    /// Lines written once to the header before any statement
    fn preamble(&self) -> &'static [&'static str];

    /// Opens a print call; the argument follows
    fn print_open(&self) -> &'static str;

    /// Closes a print call
    fn print_close(&self) -> &'static str;

    /// Quote string literal text; the text never holds quotes or escapes
    fn string_literal(&self, text: &str) -> String;

    fn if_open(&self) -> &'static str;

    fn while_open(&self) -> &'static str;

    /// Opens a function definition; the name follows
    fn def_open(&self) -> &'static str;

    /// Terminates a block header line (`if`, `while`, `def`)
    fn block_open(&self) -> &'static str;

    /// A complete `else` line
    fn else_line(&self) -> &'static str;

    fn assign(&self) -> &'static str;

    /// Expression reading one number from standard input
    fn read_number(&self) -> &'static str;

    fn return_open(&self) -> &'static str;

    fn logical_and(&self) -> &'static str;

    fn logical_or(&self) -> &'static str;

    fn logical_not(&self) -> &'static str;

    /// Statement standing in for an empty block body
    fn empty_body(&self) -> &'static str;
}
