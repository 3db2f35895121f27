//! Lexical analysis module.
//!
//! Converts source text into a flat stream of classified tokens:
//!
//! - An ordered table of anchored regex patterns decides each token's class
//! - Whitespace is dropped unless configured otherwise
//! - Unrecognised characters are skipped with a logged warning
//! - Every stream ends with exactly one EOF token

pub mod lexer;
pub mod patterns;
pub mod tokens;
