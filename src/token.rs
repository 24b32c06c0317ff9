use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::mem;

/// The different kinds of tokens recognized by the scanner.
///
/// Variants without data represent punctuation or keyword tokens.
/// `NUMBER(i64)` carries its literal value.
/// `IDENTIFIER` is used for user‑defined names.
/// `EOF` marks the end of input.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Serialize)]
pub enum TokenType {
    /// '('
    LEFT_PAREN,

    /// ')'
    RIGHT_PAREN,

    /// '\' (lambda marker)
    BACKSLASH,

    /// '->'
    ARROW,

    /// '='
    EQUAL,

    /// A user‑defined identifier
    IDENTIFIER,

    /// An unsigned base‑10 integer literal
    #[serde(rename = "NUMBER")]
    NUMBER(i64),

    /// 'let'
    LET,

    /// 'in'
    IN,

    /// 'true'
    TRUE,

    /// 'false'
    FALSE,

    /// End‑of‑input marker
    EOF,
}

impl TokenType {
    /// Upper‑case kind name without payload, as printed by `tokenize`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::LEFT_PAREN => "LEFT_PAREN",
            TokenType::RIGHT_PAREN => "RIGHT_PAREN",
            TokenType::BACKSLASH => "BACKSLASH",
            TokenType::ARROW => "ARROW",
            TokenType::EQUAL => "EQUAL",
            TokenType::IDENTIFIER => "IDENTIFIER",
            TokenType::NUMBER(_) => "NUMBER",
            TokenType::LET => "LET",
            TokenType::IN => "IN",
            TokenType::TRUE => "TRUE",
            TokenType::FALSE => "FALSE",
            TokenType::EOF => "EOF",
        }
    }
}

impl PartialEq for TokenType {
    /// Two TokenTypes are equal if they share the same variant
    /// (ignoring any inner data). Uses `mem::discriminant` to compare.
    fn eq(&self, other: &Self) -> bool {
        debug!("Comparing TokenType: self={:?}, other={:?}", self, other);

        let same: bool = mem::discriminant(self) == mem::discriminant(other);

        debug!("TokenType match result: {}", same);

        same
    }
}

/// A scanned token, including its type, the original lexeme,
/// and the line number where it was found.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Token<'a> {
    /// The category of this token.
    pub token_type: TokenType,

    /// The exact substring from the source that produced this token.
    pub lexeme: &'a str,

    /// 1‑based line number in the source.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Create a new Token with the given type, lexeme, and line.
    pub fn new(token_type: TokenType, lexeme: &'a str, line: usize) -> Self {
        info!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type, lexeme, line
        );

        Self {
            token_type,
            lexeme,
            line,
        }
    }

    /// Human‑readable description used in parse diagnostics.
    pub fn describe(&self) -> &'a str {
        match self.token_type {
            TokenType::EOF => "end of input",
            _ => self.lexeme,
        }
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug!(
            "Formatting token: type={:?}, lexeme={}, line={}",
            self.token_type, self.lexeme, self.line
        );

        // Integer payloads print through a stack buffer; everything else is `null`.
        let mut buf: itoa::Buffer = itoa::Buffer::new();
        let literal_str: &str = match self.token_type {
            TokenType::NUMBER(n) => buf.format(n),
            _ => "null",
        };

        write!(
            f,
            "{} {} {}",
            self.token_type.name(),
            self.lexeme,
            literal_str
        )
    }
}
