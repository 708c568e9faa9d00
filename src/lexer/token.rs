//! Token definitions for Teeny
//!
//! Defines all token types produced by the lexer.

use crate::errors::SourceSpan;
use std::fmt;

/// A token produced by the lexer
///
/// The text is a slice of the source: for string literals it excludes the
/// quotes, for the end-of-input token it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token
    pub kind: TokenKind,
    /// Source text of this token
    pub text: &'src str,
    /// Source location of this token
    pub span: SourceSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: SourceSpan) -> Self {
        Self { kind, text, span }
    }
}

/// Keywords in the Teeny language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Control markers, reserved
    Label,
    Goto,

    // Statements
    Print,
    Input,
    Let,
    If,
    Then,
    Else,
    EndIf,
    While,
    Repeat,
    EndWhile,
    Func,
    EndFunc,
    Return,

    // Boolean operators
    And,
    Or,
    Not,
}

impl Keyword {
    /// Try to parse a string as a keyword (case-sensitive)
    pub fn parse(s: &str) -> Option<Keyword> {
        match s {
            "LABEL" => Some(Keyword::Label),
            "GOTO" => Some(Keyword::Goto),
            "PRINT" => Some(Keyword::Print),
            "INPUT" => Some(Keyword::Input),
            "LET" => Some(Keyword::Let),
            "IF" => Some(Keyword::If),
            "THEN" => Some(Keyword::Then),
            "ELSE" => Some(Keyword::Else),
            "ENDIF" => Some(Keyword::EndIf),
            "WHILE" => Some(Keyword::While),
            "REPEAT" => Some(Keyword::Repeat),
            "ENDWHILE" => Some(Keyword::EndWhile),
            "FUNC" => Some(Keyword::Func),
            "ENDFUNC" => Some(Keyword::EndFunc),
            "RETURN" => Some(Keyword::Return),
            "AND" => Some(Keyword::And),
            "OR" => Some(Keyword::Or),
            "NOT" => Some(Keyword::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Label => "LABEL",
            Keyword::Goto => "GOTO",
            Keyword::Print => "PRINT",
            Keyword::Input => "INPUT",
            Keyword::Let => "LET",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::EndIf => "ENDIF",
            Keyword::While => "WHILE",
            Keyword::Repeat => "REPEAT",
            Keyword::EndWhile => "ENDWHILE",
            Keyword::Func => "FUNC",
            Keyword::EndFunc => "ENDFUNC",
            Keyword::Return => "RETURN",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Not => "NOT",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// End of input
    Eof,
    /// Line terminator
    Newline,

    // Literals
    /// Numeric literal, digits with an optional fraction
    Number,
    /// Identifier
    Ident,
    /// String literal
    String,
    /// Keyword
    Keyword(Keyword),

    // Operators
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

impl TokenKind {
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Check if this is one of the six relational/equality operators
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Get a human-readable description of this token kind
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Newline => "newline",
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Eq => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Asterisk => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
