//! Centralised error hierarchy for the **lambda-let interpreter**.
//!
//! Every stage (scanner, parser, evaluator, CLI) converts its failure modes into
//! one of the variants defined here. Each stage fails fast: the first error
//! aborts the pipeline and is handed to the caller unchanged.
//!
//! The module **does not** print diagnostics itself; the driver decides how
//! to report them and which exit status to use.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use log::info;

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LangError {
    /// Lexical error: a character outside the language's alphabet.
    #[error("[line {line}:{column}] Error: Unexpected character: {character}")]
    UnexpectedCharacter {
        character: char,

        /// 1‑based line of the offending character.
        line: usize,

        /// 1‑based column (in bytes) of the offending character.
        column: usize,
    },

    /// Lexical error: an integer literal that does not fit in an `i64`.
    #[error("[line {line}] Error: Integer literal out of range: {lexeme}")]
    IntegerOutOfRange { lexeme: String, line: usize },

    /// Syntactic error: a token with no grammar production at its position.
    #[error("[line {line}] Error at '{found}': Expected {expected}.")]
    UnexpectedToken {
        /// Lexeme of the offending token (empty at end of input).
        found: String,

        /// What the parser was looking for.
        expected: String,

        line: usize,
    },

    /// Syntactic error: `(` without a matching `)`.
    #[error("[line {line}] Error: Unclosed '('.")]
    UnclosedParen {
        /// Line of the opening parenthesis.
        line: usize,
    },

    /// Semantic error: a variable with no enclosing binding.
    #[error("Runtime error: Unbound variable '{0}'.")]
    UnboundVariable(String),

    /// Semantic error: application whose callee is not a closure.
    #[error("Runtime error: Cannot apply a value of type {type_name} ({value}).")]
    ApplyNonFunction {
        /// Runtime tag of the callee (`Int` or `Bool`).
        type_name: &'static str,

        /// Display form of the callee.
        value: String,
    },

    /// A source file could not be opened or read.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on I/O ops.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// UTF‑8 decoding failure when ingesting external text.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl LangError {
    /// Helper constructor for the **scanner**.
    pub fn unexpected_character(character: char, line: usize, column: usize) -> Self {
        info!(
            "Creating UnexpectedCharacter error: line={}, column={}, char={:?}",
            line, column, character
        );

        LangError::UnexpectedCharacter {
            character,
            line,
            column,
        }
    }

    /// Helper constructor for the **parser**.
    pub fn unexpected_token<F, E>(line: usize, found: F, expected: E) -> Self
    where
        F: Into<String>,
        E: Into<String>,
    {
        let found: String = found.into();
        let expected: String = expected.into();

        info!(
            "Creating UnexpectedToken error: line={}, found={}, expected={}",
            line, found, expected
        );

        LangError::UnexpectedToken {
            found,
            expected,
            line,
        }
    }

    /// Helper constructor for the **evaluator**.
    pub fn unbound_variable<S: Into<String>>(name: S) -> Self {
        let name: String = name.into();

        info!("Creating UnboundVariable error: name={}", name);

        LangError::UnboundVariable(name)
    }

    /// Helper constructor for **source loading**.
    pub fn read(path: &Path, source: io::Error) -> Self {
        info!("Creating Read error: path={:?}, cause={}", path, source);

        LangError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit status a driver should use for this error.
    ///
    /// Lexical and syntactic failures map to `65` (bad input data), semantic
    /// failures to `70` (evaluation failed) and I/O failures to `74`.
    pub fn exit_code(&self) -> i32 {
        match self {
            LangError::UnexpectedCharacter { .. }
            | LangError::IntegerOutOfRange { .. }
            | LangError::UnexpectedToken { .. }
            | LangError::UnclosedParen { .. }
            | LangError::Utf8(_) => 65,

            LangError::UnboundVariable(_) | LangError::ApplyNonFunction { .. } => 70,

            LangError::Read { .. } | LangError::Io(_) => 74,
        }
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LangError>;
