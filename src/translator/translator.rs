//! Syntax-directed translator for Teeny
//!
//! Each grammar production validates its tokens and writes the matching
//! target fragments as it goes, so the generated code follows the source
//! token order exactly.

use log::{debug, info};

use super::registry::{NameKind, Registry};
use crate::codegen::{Emitter, Python, Sink, Target};
use crate::config::TranslateOptions;
use crate::errors::{TeenyError, TeenyResult};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// A single translation session
///
/// Owns the lexer, the two-token window, the declared names and the output
/// buffer, so independent translations never share state.
pub struct Translator<'src> {
    lexer: Lexer<'src>,
    /// Token being examined
    current: Token<'src>,
    /// The token after `current`
    lookahead: Token<'src>,
    registry: Registry,
    /// True while translating a function body
    in_function: bool,
    emitter: Emitter,
    target: Box<dyn Target>,
    /// Number of statements translated so far
    statements: usize,
}

impl<'src> Translator<'src> {
    /// Create a translator emitting Python
    pub fn new(source: &'src str, options: &TranslateOptions) -> TeenyResult<Self> {
        Self::with_target(source, options, Box::new(Python))
    }

    /// Create a translator for an arbitrary back end
    pub fn with_target(
        source: &'src str,
        options: &TranslateOptions,
        target: Box<dyn Target>,
    ) -> TeenyResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let lookahead = lexer.next_token()?;

        Ok(Self {
            lexer,
            current,
            lookahead,
            registry: Registry::new(),
            in_function: false,
            emitter: Emitter::new(options.indent_width),
            target,
            statements: 0,
        })
    }

    /// Translate the whole program and return header followed by body
    pub fn translate(mut self) -> TeenyResult<String> {
        self.program()?;
        Ok(self.emitter.finish())
    }

    /// Hand the generated code to a sink
    ///
    /// Call after [`Translator::program`] has succeeded.
    pub fn commit<S: Sink + ?Sized>(self, sink: &mut S) -> TeenyResult<()> {
        self.emitter.commit(sink)
    }

    /// The output buffer, complete once [`Translator::program`] succeeded
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Names declared so far
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// True while a function body is being translated
    pub fn in_function(&self) -> bool {
        self.in_function
    }

    /// The back end fragments are taken from
    pub fn target(&self) -> &dyn Target {
        self.target.as_ref()
    }

    // ==================== Helpers ====================

    /// Check if current token matches
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Check if the token after the current one matches
    fn check_peek(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Check if current token is a keyword
    fn check_keyword(&self, kw: Keyword) -> bool {
        self.check(TokenKind::Keyword(kw))
    }

    /// Shift the window by one token
    fn advance(&mut self) -> TeenyResult<()> {
        let next = self.lexer.next_token()?;
        self.current = std::mem::replace(&mut self.lookahead, next);
        Ok(())
    }

    /// Describe the current token for error messages
    fn found(&self) -> String {
        match self.current.kind {
            TokenKind::Eof | TokenKind::Newline => self.current.kind.to_string(),
            TokenKind::String => format!("string \"{}\"", self.current.text),
            _ => format!("'{}'", self.current.text),
        }
    }

    fn unexpected(&self, msg: &str) -> TeenyError {
        TeenyError::syntax(format!("{}, found {}", msg, self.found()), self.current.span)
    }

    /// Consume a token if it matches, otherwise error
    fn expect(&mut self, kind: TokenKind, msg: &str) -> TeenyResult<Token<'src>> {
        if !self.check(kind) {
            return Err(self.unexpected(msg));
        }
        let token = self.current;
        self.advance()?;
        Ok(token)
    }

    /// Consume a keyword if it matches, otherwise error
    fn expect_keyword(&mut self, kw: Keyword) -> TeenyResult<()> {
        self.expect(TokenKind::Keyword(kw), &format!("expected {}", kw))?;
        Ok(())
    }

    // ==================== Program ====================

    /// program ::= {nl} {statement}
    pub fn program(&mut self) -> TeenyResult<()> {
        for line in self.target.preamble() {
            self.emitter.header_line(line);
        }

        while self.check(TokenKind::Newline) {
            self.advance()?;
        }

        while !self.check(TokenKind::Eof) {
            self.statement()?;
        }

        info!(
            "translated {} statements to {}, {} names declared",
            self.statements,
            self.target.language_name(),
            self.registry.len()
        );
        Ok(())
    }

    /// nl ::= '\n'+
    fn nl(&mut self) -> TeenyResult<()> {
        self.expect(TokenKind::Newline, "expected newline")?;
        while self.check(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }

    /// Statements up to one of the terminators, which is left unconsumed
    fn block(&mut self, terminators: &[Keyword]) -> TeenyResult<()> {
        debug!("block at depth {}", self.emitter.indent_level());

        let mut count = 0;
        while !terminators.iter().any(|kw| self.check_keyword(*kw)) {
            if self.check(TokenKind::Eof) {
                let expected: Vec<&str> = terminators.iter().map(Keyword::as_str).collect();
                return Err(self.unexpected(&format!("expected {}", expected.join(" or "))));
            }
            self.statement()?;
            count += 1;
        }

        if count == 0 {
            self.emitter.emit_line(self.target.empty_body());
        }
        Ok(())
    }

    // ==================== Statements ====================

    fn statement(&mut self) -> TeenyResult<()> {
        match self.current.kind {
            TokenKind::Keyword(Keyword::Print) => self.print_statement()?,
            TokenKind::Keyword(Keyword::If) => self.if_statement()?,
            TokenKind::Keyword(Keyword::While) => self.while_statement()?,
            TokenKind::Keyword(Keyword::Func) => self.function()?,
            TokenKind::Keyword(Keyword::Let) => self.let_statement()?,
            TokenKind::Keyword(Keyword::Input) => self.input_statement()?,
            TokenKind::Keyword(Keyword::Return) => self.return_statement()?,
            TokenKind::Keyword(kw @ (Keyword::And | Keyword::Or | Keyword::Not)) => {
                return Err(TeenyError::syntax(
                    format!("boolean operator {} cannot start a statement", kw),
                    self.current.span,
                ));
            }
            kind => {
                return Err(TeenyError::syntax(
                    format!(
                        "invalid statement at '{}' ({})",
                        self.current.text.escape_default(),
                        kind
                    ),
                    self.current.span,
                ));
            }
        }

        self.statements += 1;
        self.nl()
    }

    /// "PRINT" (string | expression)
    fn print_statement(&mut self) -> TeenyResult<()> {
        self.advance()?;
        self.emitter.emit(self.target.print_open());

        if self.check(TokenKind::String) {
            let literal = self.target.string_literal(self.current.text);
            self.emitter.emit(&literal);
            self.advance()?;
        } else {
            self.expression()?;
        }

        self.emitter.emit_line(self.target.print_close());
        Ok(())
    }

    /// "IF" condition "THEN" nl {statement} ["ELSE" nl {statement}] "ENDIF"
    fn if_statement(&mut self) -> TeenyResult<()> {
        self.advance()?;
        self.emitter.emit(self.target.if_open());
        self.condition()?;
        self.emitter.emit_line(self.target.block_open());
        self.expect_keyword(Keyword::Then)?;
        self.nl()?;

        self.emitter.increase_indent();
        self.block(&[Keyword::Else, Keyword::EndIf])?;

        if self.check_keyword(Keyword::Else) {
            self.advance()?;
            self.emitter.decrease_indent();
            self.emitter.emit_line(self.target.else_line());
            self.emitter.increase_indent();
            self.nl()?;
            self.block(&[Keyword::EndIf])?;
        }

        self.emitter.decrease_indent();
        self.expect_keyword(Keyword::EndIf)
    }

    /// "WHILE" condition "REPEAT" nl {statement} "ENDWHILE"
    fn while_statement(&mut self) -> TeenyResult<()> {
        self.advance()?;
        self.emitter.emit(self.target.while_open());
        self.condition()?;
        self.emitter.emit_line(self.target.block_open());
        self.expect_keyword(Keyword::Repeat)?;
        self.nl()?;

        self.emitter.increase_indent();
        self.block(&[Keyword::EndWhile])?;
        self.emitter.decrease_indent();

        self.expect_keyword(Keyword::EndWhile)
    }

    /// "FUNC" ident "(" [ident {"," ident}] ")" nl {statement} "ENDFUNC"
    fn function(&mut self) -> TeenyResult<()> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident, "expected function name after FUNC")?;
        self.registry.declare(name.text, NameKind::Function);

        self.emitter.emit(self.target.def_open());
        self.emitter.emit(name.text);
        self.expect(TokenKind::LParen, "expected '(' after function name")?;
        self.emitter.emit("(");

        if self.check(TokenKind::Ident) {
            loop {
                let param = self.expect(TokenKind::Ident, "expected parameter name")?;
                self.registry.declare(param.text, NameKind::Variable);
                self.emitter.emit(param.text);

                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.advance()?;
                self.emitter.emit(", ");
            }
        }

        self.expect(TokenKind::RParen, "expected ')' after parameters")?;
        self.emitter.emit(")");
        self.emitter.emit_line(self.target.block_open());
        self.nl()?;

        let enclosing = std::mem::replace(&mut self.in_function, true);
        self.emitter.increase_indent();
        self.block(&[Keyword::EndFunc])?;
        self.emitter.decrease_indent();
        self.expect_keyword(Keyword::EndFunc)?;
        self.in_function = enclosing;

        Ok(())
    }

    /// "LET" ident "=" expression
    fn let_statement(&mut self) -> TeenyResult<()> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident, "expected variable name after LET")?;
        self.registry.declare(name.text, NameKind::Variable);

        self.emitter.emit(name.text);
        self.emitter.emit(self.target.assign());
        self.expect(TokenKind::Eq, "expected '=' after variable name")?;
        self.expression()?;
        self.emitter.emit_line("");
        Ok(())
    }

    /// "INPUT" ident
    fn input_statement(&mut self) -> TeenyResult<()> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident, "expected variable name after INPUT")?;
        self.registry.declare(name.text, NameKind::Variable);

        self.emitter.emit(name.text);
        self.emitter.emit(self.target.assign());
        self.emitter.emit_line(self.target.read_number());
        Ok(())
    }

    /// "RETURN" expression, only inside a function body
    fn return_statement(&mut self) -> TeenyResult<()> {
        if !self.in_function {
            return Err(TeenyError::syntax(
                "RETURN outside of function",
                self.current.span,
            ));
        }

        self.advance()?;
        self.emitter.emit(self.target.return_open());
        self.expression()?;
        self.emitter.emit_line("");
        Ok(())
    }

    // ==================== Conditions ====================

    fn condition(&mut self) -> TeenyResult<()> {
        self.boolean_expr()
    }

    /// booleanExpr ::= booleanTerm {"OR" booleanTerm}
    fn boolean_expr(&mut self) -> TeenyResult<()> {
        self.boolean_term()?;
        while self.check_keyword(Keyword::Or) {
            self.advance()?;
            self.emitter.emit(self.target.logical_or());
            self.boolean_term()?;
        }
        Ok(())
    }

    /// booleanTerm ::= booleanFactor {"AND" booleanFactor}
    fn boolean_term(&mut self) -> TeenyResult<()> {
        self.boolean_factor()?;
        while self.check_keyword(Keyword::And) {
            self.advance()?;
            self.emitter.emit(self.target.logical_and());
            self.boolean_factor()?;
        }
        Ok(())
    }

    /// booleanFactor ::= "NOT" booleanFactor | "(" booleanExpr ")" | comparison
    fn boolean_factor(&mut self) -> TeenyResult<()> {
        if self.check_keyword(Keyword::Not) {
            self.advance()?;
            self.emitter.emit(self.target.logical_not());
            self.boolean_factor()
        } else if self.check(TokenKind::LParen) {
            self.advance()?;
            self.emitter.emit("(");
            self.boolean_expr()?;
            self.expect(TokenKind::RParen, "expected ')' to close condition")?;
            self.emitter.emit(")");
            Ok(())
        } else {
            self.comparison()
        }
    }

    /// comparison ::= expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+
    ///
    /// Chains such as `a < b < c` are written out as scanned.
    fn comparison(&mut self) -> TeenyResult<()> {
        self.expression()?;

        if !self.current.kind.is_comparison() {
            return Err(self.unexpected("expected comparison operator"));
        }

        while self.current.kind.is_comparison() {
            self.emitter.emit(self.current.text);
            self.advance()?;
            self.expression()?;
        }
        Ok(())
    }

    // ==================== Expressions ====================

    /// expression ::= term {("+" | "-") term}
    fn expression(&mut self) -> TeenyResult<()> {
        self.term()?;
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.emitter.emit(self.current.text);
            self.advance()?;
            self.term()?;
        }
        Ok(())
    }

    /// term ::= unary {("*" | "/") unary}
    fn term(&mut self) -> TeenyResult<()> {
        self.unary()?;
        while self.check(TokenKind::Asterisk) || self.check(TokenKind::Slash) {
            self.emitter.emit(self.current.text);
            self.advance()?;
            self.unary()?;
        }
        Ok(())
    }

    /// unary ::= ["+" | "-"] primary
    fn unary(&mut self) -> TeenyResult<()> {
        if self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.emitter.emit(self.current.text);
            self.advance()?;
        }
        self.primary()
    }

    /// primary ::= number | ident ["(" [expression {"," expression}] ")"]
    fn primary(&mut self) -> TeenyResult<()> {
        match self.current.kind {
            TokenKind::Number => {
                self.emitter.emit(self.current.text);
                self.advance()
            }
            TokenKind::Ident => {
                let name = self.current;
                if !self.registry.is_declared(name.text) {
                    return Err(TeenyError::syntax(
                        format!("'{}' used before declared", name.text),
                        name.span,
                    ));
                }

                if self.check_peek(TokenKind::LParen) {
                    self.call()
                } else {
                    self.emitter.emit(name.text);
                    self.advance()
                }
            }
            _ => Err(self.unexpected("expected number or identifier")),
        }
    }

    /// Call of an already declared name; current token is the name
    fn call(&mut self) -> TeenyResult<()> {
        if self.registry.kind_of(self.current.text) == Some(NameKind::Variable) {
            debug!("calling '{}', declared as a variable", self.current.text);
        }
        self.emitter.emit(self.current.text);
        self.advance()?;
        self.advance()?; // '('
        self.emitter.emit("(");

        if !self.check(TokenKind::RParen) {
            self.expression()?;
            while self.check(TokenKind::Comma) {
                self.advance()?;
                self.emitter.emit(", ");
                self.expression()?;
            }
        }

        self.expect(TokenKind::RParen, "expected ')' after arguments")?;
        self.emitter.emit(")");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> TeenyResult<Translator<'_>> {
        let mut translator = Translator::new(source, &TranslateOptions::default())?;
        translator.program()?;
        Ok(translator)
    }

    fn body(source: &str) -> String {
        let translator = run(source).unwrap();
        assert_eq!(translator.emitter().indent_level(), 0);
        translator.emitter().body().to_string()
    }

    fn fail(source: &str) -> TeenyError {
        match run(source) {
            Ok(t) => panic!("expected failure, got:\n{}", t.emitter().body()),
            Err(e) => e,
        }
    }

    #[test]
    fn test_let_and_print() {
        assert_eq!(body("LET x = 5\nPRINT x\n"), "x = 5\nprint(x)\n");
    }

    #[test]
    fn test_header_written_once() {
        let translator = run("PRINT 1\nPRINT 2\n").unwrap();
        assert_eq!(translator.emitter().header(), "import sys\n");
    }

    #[test]
    fn test_print_string() {
        assert_eq!(body("PRINT \"hello, world!\"\n"), "print(\"hello, world!\")\n");
    }

    #[test]
    fn test_print_expression() {
        assert_eq!(
            body("LET a = 2\nPRINT a * 3 + 1\n"),
            "a = 2\nprint(a*3+1)\n"
        );
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            body("LET x = 2\nIF x == 1 THEN\nPRINT 1\nELSE\nPRINT 2\nENDIF\n"),
            "x = 2\nif x==1:\n    print(1)\nelse:\n    print(2)\n"
        );
    }

    #[test]
    fn test_while_loop() {
        assert_eq!(
            body("LET n = 3\nWHILE n > 0 REPEAT\nPRINT n\nLET n = n - 1\nENDWHILE\n"),
            "n = 3\nwhile n>0:\n    print(n)\n    n = n-1\n"
        );
    }

    #[test]
    fn test_function_definition_and_call() {
        assert_eq!(
            body("FUNC add(a, b)\nRETURN a + b\nENDFUNC\nPRINT add(1, 2 * 3)\n"),
            "def add(a, b):\n    return a+b\nprint(add(1, 2*3))\n"
        );
    }

    #[test]
    fn test_zero_argument_call() {
        assert_eq!(
            body("FUNC one()\nRETURN 1\nENDFUNC\nLET x = one() + 1\n"),
            "def one():\n    return 1\nx = one()+1\n"
        );
    }

    #[test]
    fn test_nested_call_arguments() {
        assert_eq!(
            body("FUNC sq(n)\nRETURN n * n\nENDFUNC\nPRINT sq(sq(2) - -1)\n"),
            "def sq(n):\n    return n*n\nprint(sq(sq(2)--1))\n"
        );
    }

    #[test]
    fn test_recursive_function() {
        let out = body(
            "FUNC fact(n)\nIF n <= 1 THEN\nRETURN 1\nENDIF\nRETURN n * fact(n - 1)\nENDFUNC\n",
        );
        assert_eq!(
            out,
            "def fact(n):\n    if n<=1:\n        return 1\n    return n*fact(n-1)\n"
        );
    }

    #[test]
    fn test_nested_function_restores_state() {
        let translator =
            run("FUNC outer()\nFUNC inner()\nRETURN 1\nENDFUNC\nRETURN inner()\nENDFUNC\n")
                .unwrap();
        assert_eq!(
            translator.emitter().body(),
            "def outer():\n    def inner():\n        return 1\n    return inner()\n"
        );
        assert!(!translator.in_function());
    }

    #[test]
    fn test_input() {
        assert_eq!(
            body("INPUT n\nPRINT n * 2\n"),
            "n = float(input())\nprint(n*2)\n"
        );
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(
            body("LET x = -5\nLET y = +x * -2\n"),
            "x = -5\ny = +x*-2\n"
        );
    }

    #[test]
    fn test_chained_comparison_kept_verbatim() {
        let out = body("LET a = 1\nLET b = 2\nLET c = 3\nIF a < b < c THEN\nPRINT a\nENDIF\n");
        assert!(out.contains("if a<b<c:\n    print(a)\n"));
    }

    #[test]
    fn test_boolean_condition() {
        let out = body(
            "LET a = 1\nLET b = 2\nLET c = 3\n\
             IF a > 1 AND NOT b == 2 OR (c < 3 AND a != c) THEN\nPRINT a\nENDIF\n",
        );
        assert!(out.contains("if a>1 and not b==2 or (c<3 and a!=c):\n"));
    }

    #[test]
    fn test_empty_blocks_get_pass() {
        assert_eq!(
            body("LET x = 1\nWHILE x < 0 REPEAT\nENDWHILE\nIF x > 0 THEN\nELSE\nPRINT x\nENDIF\n"),
            "x = 1\nwhile x<0:\n    pass\nif x>0:\n    pass\nelse:\n    print(x)\n"
        );
        assert_eq!(body("FUNC noop()\nENDFUNC\n"), "def noop():\n    pass\n");
    }

    #[test]
    fn test_blank_lines_and_comments() {
        assert_eq!(
            body("\n\n# setup\nLET x = 1 # one\n\n\nPRINT x"),
            "x = 1\nprint(x)\n"
        );
        assert_eq!(body(""), "");
    }

    #[test]
    fn test_nested_indentation_balances() {
        let out = body(
            "FUNC f(n)\nWHILE n > 0 REPEAT\nIF n == 2 THEN\nPRINT \"two\"\nENDIF\n\
             LET n = n - 1\nENDWHILE\nRETURN n\nENDFUNC\n",
        );
        assert_eq!(
            out,
            "def f(n):\n    while n>0:\n        if n==2:\n            print(\"two\")\n        n = n-1\n    return n\n"
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let options = TranslateOptions::new().with_indent_width(2);
        let code = Translator::new("LET x = 1\nIF x > 0 THEN\nPRINT x\nENDIF\n", &options)
            .unwrap()
            .translate()
            .unwrap();
        assert_eq!(code, "import sys\nx = 1\nif x>0:\n  print(x)\n");
    }

    #[test]
    fn test_redeclaration_is_accepted() {
        let translator = run("LET x = 1\nLET x = x + 1\nINPUT x\n").unwrap();
        assert_eq!(
            translator.emitter().body(),
            "x = 1\nx = x+1\nx = float(input())\n"
        );
        assert_eq!(translator.registry().len(), 1);
    }

    #[test]
    fn test_let_target_readable_in_own_initializer() {
        assert_eq!(body("LET x = x + 1\n"), "x = x+1\n");
    }

    #[test]
    fn test_number_with_trailing_point() {
        assert_eq!(body("LET x = 1.\n"), "x = 1.\n");
    }

    #[test]
    fn test_parameter_can_be_called() {
        let translator = run("FUNC apply(f, x)\nRETURN f(x)\nENDFUNC\n").unwrap();
        assert_eq!(
            translator.emitter().body(),
            "def apply(f, x):\n    return f(x)\n"
        );
        assert_eq!(translator.registry().kind_of("f"), Some(NameKind::Variable));
    }

    #[test]
    fn test_registry_collects_all_declarations() {
        let translator = run("INPUT n\nFUNC f(a, b)\nRETURN a\nENDFUNC\nLET z = f(n, 1)\n").unwrap();
        let registry = translator.registry();
        for name in ["n", "f", "a", "b", "z"] {
            assert!(registry.is_declared(name), "{name} should be declared");
        }
        assert_eq!(registry.kind_of("f"), Some(NameKind::Function));
        assert_eq!(registry.kind_of("a"), Some(NameKind::Variable));
    }

    #[test]
    fn test_use_before_declare_everywhere() {
        let cases = [
            "PRINT y\n",
            "LET x = y\n",
            "LET x = 1\nPRINT x + y\n",
            "IF y > 1 THEN\nENDIF\n",
            "LET x = 1\nWHILE x < y REPEAT\nENDWHILE\n",
            "FUNC f()\nRETURN q\nENDFUNC\n",
            "FUNC f(a)\nRETURN a\nENDFUNC\nPRINT f(z)\n",
            "PRINT g(1)\n",
        ];
        for source in cases {
            let err = fail(source);
            assert!(err.is_syntax(), "{source:?}");
            assert!(err.message().contains("used before declared"), "{source:?}: {err}");
        }
    }

    #[test]
    fn test_return_outside_function() {
        let err = fail("RETURN 1\n");
        assert!(err.is_syntax());
        assert!(err.message().contains("RETURN outside of function"));

        let err = fail("FUNC f()\nRETURN 1\nENDFUNC\nRETURN 2\n");
        assert!(err.message().contains("RETURN outside of function"));
    }

    #[test]
    fn test_invalid_statement() {
        let err = fail("LET x = 1\nx = 2\n");
        assert_eq!(err.message(), "invalid statement at 'x' (identifier)");

        let err = fail("LABEL top\n");
        assert_eq!(err.message(), "invalid statement at 'LABEL' (LABEL)");
    }

    #[test]
    fn test_leading_boolean_operator_rejected() {
        for source in ["AND\n", "LET a = 1\nOR a > 1\n", "NOT 1 == 1\n"] {
            let err = fail(source);
            assert!(err.is_syntax(), "{source:?}");
            assert!(err.message().contains("cannot start a statement"));
        }
    }

    #[test]
    fn test_comparison_requires_operator() {
        let err = fail("LET x = 1\nIF x THEN\nENDIF\n");
        assert_eq!(err.message(), "expected comparison operator, found 'THEN'");
    }

    #[test]
    fn test_missing_keywords() {
        let err = fail("LET x = 1\nIF x > 0\nPRINT x\nENDIF\n");
        assert_eq!(err.message(), "expected THEN, found newline");

        let err = fail("LET x = 1\nWHILE x > 0 THEN\nENDWHILE\n");
        assert_eq!(err.message(), "expected REPEAT, found 'THEN'");
    }

    #[test]
    fn test_unterminated_block() {
        let err = fail("IF 1 > 0 THEN\nPRINT 1\n");
        assert_eq!(err.message(), "expected ELSE or ENDIF, found end of input");

        let err = fail("FUNC f()\nRETURN 1\n");
        assert_eq!(err.message(), "expected ENDFUNC, found end of input");
    }

    #[test]
    fn test_statements_need_newlines() {
        let err = fail("PRINT 1 PRINT 2\n");
        assert_eq!(err.message(), "expected newline, found 'PRINT'");
    }

    #[test]
    fn test_malformed_calls_and_groups() {
        let err = fail("FUNC f(a)\nRETURN a\nENDFUNC\nPRINT f(1\n");
        assert!(err.message().starts_with("expected ')' after arguments"));

        let err = fail("LET a = 1\nIF (a > 1 THEN\nENDIF\n");
        assert!(err.message().starts_with("expected ')' to close condition"));

        let err = fail("FUNC f(1)\nENDFUNC\n");
        assert!(err.message().starts_with("expected ')' after parameters"));
    }

    #[test]
    fn test_lex_errors_propagate() {
        assert!(fail("PRINT 1 ! 2\n").is_lexer());
        assert!(fail("PRINT \"100%\"\n").is_lexer());
        assert!(fail("LET x = 1 @ 2\n").is_lexer());
    }

    #[test]
    fn test_error_span_points_at_token() {
        let err = fail("LET x = 1\nPRINT y\n");
        assert_eq!(err.span(), Some(crate::errors::SourceSpan::new(16, 17)));
    }
}
