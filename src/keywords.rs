//! Reserved‑word resolution.
//!
//! The scanner lexes every alphanumeric run as an identifier first and then
//! passes it through here, so the parser never sees an `IDENTIFIER` spelled
//! `let`, `in`, `true` or `false`.

use crate::token::{Token, TokenType};
use log::debug;
use phf::phf_map;

// ─────────────────────────────────────────────────────────────────────────────
// Static keyword map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static KEYWORDS: phf::Map<&'static [u8], TokenType> = phf_map! {
    b"let"   => TokenType::LET,
    b"in"    => TokenType::IN,
    b"true"  => TokenType::TRUE,
    b"false" => TokenType::FALSE,
};

/// Look up a lexeme in the reserved‑word table.
#[inline]
pub fn keyword(lexeme: &[u8]) -> Option<TokenType> {
    KEYWORDS.get(lexeme).cloned()
}

/// Reclassify an `IDENTIFIER` token as a reserved word when its text matches
/// one exactly. Any other token is returned unchanged.
pub fn resolve_keyword(token: Token<'_>) -> Token<'_> {
    if token.token_type != TokenType::IDENTIFIER {
        return token;
    }

    match keyword(token.lexeme.as_bytes()) {
        Some(token_type) => {
            debug!("Identifier '{}' resolved to keyword", token.lexeme);

            Token {
                token_type,
                ..token
            }
        }

        None => token,
    }
}
