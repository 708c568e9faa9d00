//! Error handling for Teeny
//!
//! Provides structured error types with source location tracking
//! for helpful diagnostic messages.

mod diagnostic;

use std::ops::Range;
use thiserror::Error;

pub use diagnostic::{format_error, offset_to_line_col, print_error};

/// A span in the source code, represented as a byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for SourceSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<SourceSpan> for Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.start..span.end
    }
}

/// The main error type for Teeny operations
///
/// Both lexing and syntax errors are fatal: the translation stops at the
/// first one and nothing is written to the output sink.
#[derive(Error, Debug)]
pub enum TeenyError {
    #[error("Lexing error: {message}")]
    Lexer { message: String, span: SourceSpan },

    #[error("Syntax error: {message}")]
    Syntax { message: String, span: SourceSpan },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TeenyError {
    /// Get the source span associated with this error, if any
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            TeenyError::Lexer { span, .. } => Some(*span),
            TeenyError::Syntax { span, .. } => Some(*span),
            TeenyError::Io(_) => None,
        }
    }

    /// The bare message, without the error-kind prefix
    pub fn message(&self) -> String {
        match self {
            TeenyError::Lexer { message, .. } | TeenyError::Syntax { message, .. } => {
                message.clone()
            }
            TeenyError::Io(e) => e.to_string(),
        }
    }

    /// Create a lexer error
    pub fn lexer(message: impl Into<String>, span: SourceSpan) -> Self {
        TeenyError::Lexer {
            message: message.into(),
            span,
        }
    }

    /// Create a syntax error
    pub fn syntax(message: impl Into<String>, span: SourceSpan) -> Self {
        TeenyError::Syntax {
            message: message.into(),
            span,
        }
    }

    pub fn is_lexer(&self) -> bool {
        matches!(self, TeenyError::Lexer { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, TeenyError::Syntax { .. })
    }
}

/// Result type alias for Teeny operations
pub type TeenyResult<T> = Result<T, TeenyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_range_conversion() {
        let span: SourceSpan = (4..6).into();
        assert_eq!(span, SourceSpan::new(4, 6));
        assert_eq!(Range::from(span), 4..6);
    }

    #[test]
    fn test_error_display() {
        let err = TeenyError::syntax("'y' used before declared", SourceSpan::new(6, 7));
        assert_eq!(err.to_string(), "Syntax error: 'y' used before declared");
        assert_eq!(err.message(), "'y' used before declared");
        assert_eq!(err.span(), Some(SourceSpan::new(6, 7)));
        assert!(err.is_syntax());
        assert!(!err.is_lexer());
    }
}
