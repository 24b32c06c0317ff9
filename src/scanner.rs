//! Module `scanner` implements a one‑pass, streaming lexer for the lambda‑let language.
//!
//! It transforms a `&str` into a sequence of `Token<'a>`s, skipping whitespace
//! and emitting exactly one `EOF` token at the end. Designed as a `FusedIterator`,
//! it can be chained safely with other iterator adapters.
//!
//! # Public API
//!
//! - `Scanner::new(src: &'a str) -> Scanner<'a>`
//!   Create a new lexer over the input text.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token<'a>, LangError>` on each `.next()`. After an error the
//!   scanner resumes at the following character, so a driver can report every
//!   bad character in one pass.
//!
//! - `tokenize(src: &str) -> Result<Vec<Token<'_>>>`
//!   Fail‑fast convenience wrapper: the first lexical error aborts.
//!
//! # Token Recognition (`scan_token`)
//!
//! - Single‑character tokens: `(`, `)`, `\`, `=`.
//! - Two‑character operator: `->` (a lone `-` is an error).
//! - Numeric literals: maximal run of ASCII digits, unsigned, checked against `i64`.
//! - Identifiers: letter or `_` followed by letters, digits, `_`; then passed
//!   through [`resolve_keyword`] so `let`, `in`, `true`, `false` become keywords.
//! - Errors: any other character yields `LangError::UnexpectedCharacter` with
//!   its line and column.
//!
//! # Example
//!
//! ```rust
//! use lambda_let::scanner::Scanner;
//!
//! let mut scanner = Scanner::new("let id = \\x -> x in id 7");
//! for result in &mut scanner {
//!     match result {
//!         Ok(token) => println!("{}", token),
//!         Err(err)  => eprintln!("Lex error: {}", err),
//!     }
//! }
//! ```

use crate::error::{LangError, Result};
use crate::keywords::resolve_keyword;
use crate::token::{Token, TokenType};
use log::{debug, info};
use memchr::memrchr;
use std::iter::FusedIterator;

/// A single pass **scanner / lexer** that converts source text into a
/// sequence of [`Token`]s.  The lifetime `'a` ties every emitted token’s
/// `lexeme` slice back to the original source buffer.
pub struct Scanner<'a> {
    src: &'a str,               // entire source text
    start: usize,               // index of the *first* byte of the current lexeme
    curr: usize,                // index *one past* the last byte examined
    line: usize,                // 1‑based line counter (\n increments)
    pending: Option<TokenType>, // recognised token kind waiting to be emitted
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        info!("Scanner created over {} bytes", src.len());

        Self {
            src,
            start: 0,
            curr: 0,
            line: 1,
            pending: None,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    /// Return the length of the input in bytes.
    #[inline(always)]
    fn len(&self) -> usize {
        self.src.len()
    }

    /// Are we at (or past) the end of input?
    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.len()
    }

    /// Advance one byte and return it.  Callers guard with [`is_at_end`].
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.bytes()[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it.  Returns `0` if past EOF
    /// to avoid branching at call‑site.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.bytes()[self.curr]
        }
    }

    /// Conditionally consume a byte **iff** it matches `expected`.
    #[inline(always)]
    fn match_byte(&mut self, expected: u8) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 1‑based column of the current lexeme's first byte.
    fn column(&self) -> usize {
        let line_start = memrchr(b'\n', &self.bytes()[..self.start]).map_or(0, |pos| pos + 1);

        self.start - line_start + 1
    }

    /// Build an `UnexpectedCharacter` error for the character at `self.start`
    /// and step over the whole (possibly multi‑byte) character.
    fn unexpected_character(&mut self) -> LangError {
        let ch: char = self.src[self.start..].chars().next().unwrap_or('\0');

        self.curr = self.start + ch.len_utf8();

        LangError::unexpected_character(ch, self.line, self.column())
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan a *single* token starting at `self.curr`.  If the lexeme produces an
    /// actual token the kind is stored in `self.pending`.  Whitespace is skipped
    /// by returning `Ok(())` with `pending = None`.
    fn scan_token(&mut self) -> Result<()> {
        let b = self.advance();

        match b {
            // ── single‑character punctuators ──────────────────────────────
            b'(' => self.pending = Some(TokenType::LEFT_PAREN),
            b')' => self.pending = Some(TokenType::RIGHT_PAREN),
            b'\\' => self.pending = Some(TokenType::BACKSLASH),
            b'=' => self.pending = Some(TokenType::EQUAL),

            // ── arrow (->); a bare '-' has no meaning ─────────────────────
            b'-' => {
                if self.match_byte(b'>') {
                    self.pending = Some(TokenType::ARROW);
                } else {
                    return Err(self.unexpected_character());
                }
            }

            // ── whitespace / newline ─────────────────────────────────────
            b' ' | b'\r' | b'\t' => {
                return Ok(()); // skip insignificants
            }

            b'\n' => {
                self.line += 1; // track for diagnostics

                return Ok(());
            }

            // ── number literal (digit‑leading) ───────────────────────────
            b'0'..=b'9' => {
                return self.parse_number();
            }

            // ── identifiers (alpha or underscore‑leading) ────────────────
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                self.parse_identifier();
            }

            // ── unexpected character ─────────────────────────────────────
            _ => {
                return Err(self.unexpected_character());
            }
        }

        Ok(())
    }

    /// Parse an unsigned integer literal (`0`, `12`, `007`).
    fn parse_number(&mut self) -> Result<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let lexeme: &str = &self.src[self.start..self.curr];

        let n: i64 = lexeme.parse::<i64>().map_err(|_| {
            debug!("Integer literal '{}' overflows i64", lexeme);

            LangError::IntegerOutOfRange {
                lexeme: lexeme.to_owned(),
                line: self.line,
            }
        })?;

        self.pending = Some(TokenType::NUMBER(n));

        Ok(())
    }

    /// Consume the rest of an identifier.  Keyword reclassification happens
    /// once the token is built, in [`Iterator::next`].
    fn parse_identifier(&mut self) {
        while {
            let c: u8 = self.peek();
            c.is_ascii_alphanumeric() || c == b'_'
        } {
            self.advance();
        }

        self.pending = Some(TokenType::IDENTIFIER);
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>; // alias = Result<T, LangError>

    fn next(&mut self) -> Option<Self::Item> {
        // Loop until we either emit a token, hit EOF, or see an error.
        while self.curr <= self.len() {
            // 1. EOF guard – emit exactly one EOF then terminate.
            if self.curr == self.len() {
                self.curr += 1; // ensure fused semantics
                return Some(Ok(Token::new(TokenType::EOF, "", self.line)));
            }

            // 2. Reset per‑token state.
            self.start = self.curr;
            self.pending = None;

            // 3. Attempt to scan a token.
            if let Err(e) = self.scan_token() {
                return Some(Err(e));
            }

            // 4. If a real token was recognised, build and return it.
            if let Some(tt) = self.pending.take() {
                let lex: &'a str = &self.src[self.start..self.curr];
                debug!("Scanned token ({:?}) on line {}", tt, self.line);

                return Some(Ok(resolve_keyword(Token::new(tt, lex, self.line))));
            }
            // Otherwise it was whitespace → continue loop.
        }

        None // already yielded EOF
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

/// Scan `src` completely, stopping at the first lexical error.
///
/// On success the returned vector always ends with a single `EOF` token.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>> {
    info!("Tokenizing {} bytes", src.len());

    Scanner::new(src).collect()
}
