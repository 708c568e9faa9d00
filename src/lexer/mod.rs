//! Lexer module for Teeny
//!
//! Hand-written lexer that turns Teeny source code into tokens on demand.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Keyword, Token, TokenKind};
