//! Hand-written lexer/scanner for Teeny
//!
//! Converts source code into tokens, one at a time, on demand.

use log::trace;

use super::token::{Keyword, Token, TokenKind};
use crate::errors::{SourceSpan, TeenyError, TeenyResult};

/// The lexer/scanner for Teeny source code
///
/// The source is treated as if it ended with one extra `'\n'` located at
/// `source.len()`, so a file without a trailing newline still closes its
/// last statement.
pub struct Lexer<'src> {
    /// The source code being lexed
    source: &'src str,
    /// Current byte position in the source
    pos: usize,
    /// Start position of the current token
    start: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
        }
    }

    /// Get the current byte position
    pub fn position(&self) -> usize {
        self.pos
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        if pos < self.source.len() {
            self.source[pos..].chars().next()
        } else if pos == self.source.len() {
            Some('\n')
        } else {
            None
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// Peek at the next character (one ahead of current)
    fn peek_next(&self) -> Option<char> {
        let c = self.peek()?;
        self.char_at(self.pos + c.len_utf8())
    }

    /// Advance to the next character and return it
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn current_span(&self) -> SourceSpan {
        (self.start..self.pos).into()
    }

    /// Span of the character under the cursor
    fn char_span(&self) -> SourceSpan {
        let width = self.peek().map_or(0, char::len_utf8);
        (self.pos..self.pos + width).into()
    }

    /// Get the current lexeme, clamped to the real source
    fn current_lexeme(&self) -> &'src str {
        let end = self.pos.min(self.source.len());
        let start = self.start.min(end);
        &self.source[start..end]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        let text = match kind {
            TokenKind::Newline => "\n",
            _ => self.current_lexeme(),
        };
        Token::new(kind, text, self.current_span())
    }

    /// Consume the character if it matches the expected one
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip blanks and `#` comments; the line terminator itself is a token
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('#') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan a number literal: digits containing at most one decimal point
    ///
    /// The text is passed through as written, so `1.` is a valid number.
    fn scan_number(&mut self) -> Token<'src> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.match_char('.') {
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scan a string literal; the token text excludes the quotes
    fn scan_string(&mut self) -> TeenyResult<Token<'src>> {
        let content_start = self.pos;

        loop {
            match self.peek() {
                Some('"') => break,
                None | Some('\n') => {
                    return Err(TeenyError::lexer(
                        "unterminated string",
                        self.current_span(),
                    ));
                }
                Some(c) if c.is_control() || c == '\\' || c == '%' => {
                    return Err(TeenyError::lexer(
                        format!("illegal character in string: {:?}", c),
                        self.char_span(),
                    ));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let text = &self.source[content_start..self.pos];
        self.advance(); // closing quote
        Ok(Token::new(TokenKind::String, text, self.current_span()))
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> Token<'src> {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        match Keyword::parse(self.current_lexeme()) {
            Some(kw) => self.make_token(TokenKind::Keyword(kw)),
            None => self.make_token(TokenKind::Ident),
        }
    }

    /// Scan the next token
    pub fn next_token(&mut self) -> TeenyResult<Token<'src>> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            '\n' => self.make_token(TokenKind::Newline),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Asterisk),
            '/' => self.make_token(TokenKind::Slash),
            '(' => self.make_token(TokenKind::LParen),
            ')' => self.make_token(TokenKind::RParen),
            ',' => self.make_token(TokenKind::Comma),

            '=' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::EqEq)
                } else {
                    self.make_token(TokenKind::Eq)
                }
            }

            '<' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::LtEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }

            '>' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }

            '!' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    return Err(TeenyError::lexer(
                        "expected '!=', found a bare '!'",
                        self.current_span(),
                    ));
                }
            }

            '"' => self.scan_string()?,
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() => self.scan_identifier(),

            _ => {
                return Err(TeenyError::lexer(
                    format!("unknown token: {:?}", c),
                    self.current_span(),
                ));
            }
        };

        trace!("token {} {:?} at {}", token.kind, token.text, token.span.start);
        Ok(token)
    }

    /// Collect all tokens, up to and including the end-of-input token
    pub fn tokenize(mut self) -> TeenyResult<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
