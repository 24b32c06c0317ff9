/*!
Recursive‑descent parser with one token of lookahead.

Grammar (EBNF)
--------------

```text
program  → expr EOF ;
expr     → "let" IDENT "=" expr "in" expr
         | apply ;
apply    → atom atom* ;                     left‑associative: f a b = (f a) b
atom     → NUMBER | "true" | "false" | IDENT
         | "\" IDENT "->" expr              body extends as far right as possible
         | "(" expr ")" ;
```

A `let` in argument position must be parenthesised: `f (let x = 1 in x)`.

### Time & space

Each token is consumed once via `advance()`, so parsing is Θ(n) in the number
of tokens. Call‑stack depth grows with syntactic nesting.

### Errors

Parsing stops at the first error; there is no resynchronisation.

| Situation                                   | Error              |
|---------------------------------------------|--------------------|
| token with no production at its position    | `UnexpectedToken`  |
| `(` whose `)` is missing                    | `UnclosedParen`    |
| tokens left over after a complete `expr`    | `UnexpectedToken`  |

### Logging Policy

| Location                     | Level  | Purpose                                   |
|------------------------------|--------|-------------------------------------------|
| `Parser::new`, `parse`       | `info` | Lifecycle milestones.                     |
| productions                  | `debug`| Descent into grammar branches.            |
*/

use crate::ast::Expr;
use crate::error::{LangError, Result};
use crate::token::{Token, TokenType};

use log::{debug, info};

/// Returned by `peek` when the slice runs out without an explicit `EOF`.
static END_OF_INPUT: Token<'static> = Token {
    token_type: TokenType::EOF,
    lexeme: "",
    line: 0,
};

/// Top‑level parser over an immutable slice of tokens.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
}

impl<'a> Parser<'a> {
    /// Construct a new parser.
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        info!("Parser created with {} tokens", tokens.len());

        Self { tokens, current: 0 }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse the whole token slice as a single expression.
    pub fn parse(&mut self) -> Result<Expr> {
        info!("Beginning parse phase");

        let expr: Expr = self.expression()?;

        if !self.is_at_end() {
            let extra: &Token<'_> = self.peek();

            debug!("Trailing token '{}' after expression", extra.lexeme);

            return Err(LangError::unexpected_token(
                extra.line,
                extra.describe(),
                "end of input",
            ));
        }

        info!("Parse finished, tree depth {}", expr.depth());

        Ok(expr)
    }

    // ─────────────────────── expression rules ─────────────────────

    fn expression(&mut self) -> Result<Expr> {
        if self.matches(TokenType::LET) {
            self.let_in()
        } else {
            self.application()
        }
    }

    fn let_in(&mut self) -> Result<Expr> {
        debug!("Entering let binding");

        let name: &Token<'_> = self.consume(TokenType::IDENTIFIER, "a name after 'let'")?;

        self.consume(TokenType::EQUAL, "'=' after let‑bound name")?;

        let bound: Expr = self.expression()?;

        self.consume(TokenType::IN, "'in' after let‑bound expression")?;

        let body: Expr = self.expression()?;

        Ok(Expr::let_in(name.lexeme, bound, body))
    }

    fn application(&mut self) -> Result<Expr> {
        let mut expr: Expr = self.atom()?;

        while self.starts_atom() {
            debug!("Chaining application argument");

            let arg: Expr = self.atom()?;

            expr = Expr::apply(expr, arg);
        }

        Ok(expr)
    }

    fn lambda(&mut self) -> Result<Expr> {
        debug!("Entering lambda");

        let param: &Token<'_> = self.consume(TokenType::IDENTIFIER, "a parameter name after '\\'")?;

        self.consume(TokenType::ARROW, "'->' after lambda parameter")?;

        let body: Expr = self.expression()?;

        Ok(Expr::lambda(param.lexeme, body))
    }

    fn grouping(&mut self) -> Result<Expr> {
        let open: &Token<'_> = self.previous();

        if self.is_at_end() {
            debug!("Input ends right after '(' on line {}", open.line);

            return Err(LangError::UnclosedParen { line: open.line });
        }

        let expr: Expr = self.expression()?;

        if !self.matches(TokenType::RIGHT_PAREN) {
            debug!(
                "Expected ')' for '(' on line {}, found '{}'",
                open.line,
                self.peek().lexeme
            );

            return Err(LangError::UnclosedParen { line: open.line });
        }

        Ok(expr)
    }

    fn atom(&mut self) -> Result<Expr> {
        if let TokenType::NUMBER(n) = self.peek().token_type {
            self.advance();
            return Ok(Expr::Number(n));
        }

        if self.matches(TokenType::TRUE) {
            return Ok(Expr::Bool(true));
        }
        if self.matches(TokenType::FALSE) {
            return Ok(Expr::Bool(false));
        }

        if self.matches(TokenType::IDENTIFIER) {
            return Ok(Expr::var(self.previous().lexeme));
        }

        if self.matches(TokenType::BACKSLASH) {
            return self.lambda();
        }

        if self.matches(TokenType::LEFT_PAREN) {
            return self.grouping();
        }

        let token: &Token<'_> = self.peek();

        Err(LangError::unexpected_token(
            token.line,
            token.describe(),
            "expression",
        ))
    }

    // ────────────────────── utility helpers ───────────────────────

    /// Can the next token begin an `atom`?  Drives application chaining.
    fn starts_atom(&self) -> bool {
        matches!(
            self.peek().token_type,
            TokenType::NUMBER(_)
                | TokenType::TRUE
                | TokenType::FALSE
                | TokenType::IDENTIFIER
                | TokenType::BACKSLASH
                | TokenType::LEFT_PAREN
        )
    }

    #[inline(always)]
    fn matches(&mut self, ttype: TokenType) -> bool {
        if self.check(ttype) {
            self.advance();

            return true;
        }

        false
    }

    #[inline(always)]
    fn consume(&mut self, ttype: TokenType, expected: &str) -> Result<&'a Token<'a>> {
        if self.check(ttype) {
            return Ok(self.advance());
        }

        let token: &Token<'_> = self.peek();

        Err(LangError::unexpected_token(
            token.line,
            token.describe(),
            expected,
        ))
    }

    #[inline(always)]
    fn check(&self, ttype: TokenType) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().token_type == ttype
    }

    #[inline(always)]
    fn advance(&mut self) -> &'a Token<'a> {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::EOF)
    }

    #[inline(always)]
    fn peek(&self) -> &'a Token<'a> {
        self.tokens.get(self.current).unwrap_or(&END_OF_INPUT)
    }

    #[inline(always)]
    fn previous(&self) -> &'a Token<'a> {
        &self.tokens[self.current - 1]
    }
}

/// Parse a complete token sequence (as produced by `tokenize`) into an AST.
pub fn parse<'a>(tokens: &'a [Token<'a>]) -> Result<Expr> {
    Parser::new(tokens).parse()
}
