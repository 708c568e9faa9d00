//! Translator module for Teeny
//!
//! Hand-written recursive descent parser that emits target code while it
//! recognizes the grammar; no syntax tree is built.

mod registry;
mod translator;

pub use registry::{NameKind, Registry};
pub use translator::Translator;
