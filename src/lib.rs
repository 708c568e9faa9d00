//! Teeny - a keyword-driven toy language translated to Python
//!
//! Translation is a single pass: the lexer produces tokens on demand, the
//! translator recognizes the grammar and emits target code as it goes, and
//! the emitter buffers the result until it is committed to a sink.

pub mod codegen;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod translator;

// Re-export commonly used types
pub use codegen::{Emitter, FileSink, Python, Sink, Target, WriterSink};
pub use config::TranslateOptions;
pub use errors::{SourceSpan, TeenyError, TeenyResult};
pub use lexer::{Keyword, Lexer, Token, TokenKind};
pub use translator::{NameKind, Registry, Translator};

/// Translate Teeny source to Python with default options
pub fn translate(source: &str) -> TeenyResult<String> {
    translate_with(source, &TranslateOptions::default())
}

/// Translate Teeny source to Python
pub fn translate_with(source: &str, options: &TranslateOptions) -> TeenyResult<String> {
    Translator::new(source, options)?.translate()
}

/// Translate and commit the result to a sink
///
/// The sink is only written once the whole program has been translated.
pub fn translate_into<S: Sink + ?Sized>(
    source: &str,
    options: &TranslateOptions,
    sink: &mut S,
) -> TeenyResult<()> {
    let mut translator = Translator::new(source, options)?;
    translator.program()?;
    translator.commit(sink)
}
