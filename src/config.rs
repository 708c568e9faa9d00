//! Translation options

/// Options controlling a single translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Spaces per indentation level in the generated code
    pub indent_width: usize,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self { indent_width: 4 }
    }

    /// Set the indentation width of the generated code
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self::new()
    }
}
