//! Classifier table consulted by the lexer.
//!
//! Patterns are tried top to bottom and the first match wins, so the order
//! is part of the grammar: keywords come before identifiers, two character
//! operators before their one character prefixes, and decimals before
//! integers. Every pattern is anchored and its first capture group is the
//! lexeme. Anything matched after that group only checks what follows and
//! is left in the input.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenClass;

#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
    class: TokenClass,
}

impl TokenPattern {
    fn new(pattern: &str, class: TokenClass) -> Self {
        TokenPattern {
            regex: Regex::new(pattern).unwrap(),
            class,
        }
    }

    pub fn class(&self) -> TokenClass {
        self.class
    }

    /// Returns the lexeme this pattern accepts at the start of `input`.
    pub fn find<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.regex
            .captures(input)
            .and_then(|captures| captures.get(1))
            .map(|lexeme| lexeme.as_str())
            .filter(|lexeme| !lexeme.is_empty())
    }
}

lazy_static! {
    pub static ref TOKEN_PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern::new(r"^(\s+)", TokenClass::Whitespace),

        TokenPattern::new(r"^(if)($|\s|\()", TokenClass::Keyword),
        TokenPattern::new(r"^(else)($|\s|\()", TokenClass::Keyword),
        TokenPattern::new(r"^(for)($|\s|\()", TokenClass::Keyword),
        TokenPattern::new(r"^(var)($|\s|\()", TokenClass::Keyword),
        TokenPattern::new(r"^(return)($|\s|\()", TokenClass::Keyword),
        TokenPattern::new(r"^(fn)($|\s|\()", TokenClass::Keyword),

        TokenPattern::new(r"^(==)", TokenClass::Operator),
        TokenPattern::new(r"^(!=)", TokenClass::Operator),
        TokenPattern::new(r"^(\+\+)", TokenClass::Operator),
        TokenPattern::new(r"^(\+)", TokenClass::Operator),
        TokenPattern::new(r"^(--)", TokenClass::Operator),
        TokenPattern::new(r"^(-)", TokenClass::Operator),
        TokenPattern::new(r"^(\*)", TokenClass::Operator),
        TokenPattern::new(r"^(/)", TokenClass::Operator),
        TokenPattern::new(r"^(<=)", TokenClass::Operator),
        TokenPattern::new(r"^(>=)", TokenClass::Operator),
        TokenPattern::new(r"^(<)", TokenClass::Operator),
        TokenPattern::new(r"^(>)", TokenClass::Operator),
        TokenPattern::new(r"^(!)", TokenClass::Operator),

        TokenPattern::new(r"^(=)", TokenClass::Assignment),

        TokenPattern::new(r"^(;)", TokenClass::Semicolon),
        TokenPattern::new(r"^(\))", TokenClass::CloseParam),
        TokenPattern::new(r"^(\()", TokenClass::OpenParam),
        TokenPattern::new(r"^(\{)", TokenClass::OpenParam),
        TokenPattern::new(r"^(\})", TokenClass::CloseParam),

        TokenPattern::new(r"^(true)($|\s|;|,\))", TokenClass::Boolean),
        TokenPattern::new(r"^(false)($|\s|;|,\))", TokenClass::Boolean),
        TokenPattern::new(r"^([0-9]+\.[0-9]+)", TokenClass::Number),
        TokenPattern::new(r"^([0-9]+)", TokenClass::Number),

        TokenPattern::new(r"^([A-Za-z0-9_]+)", TokenClass::Identifier),
    ];
}

/// Classifies the start of `input`, returning the class and lexeme of the
/// first pattern that accepts it.
pub fn classify(input: &str) -> Option<(TokenClass, &str)> {
    TOKEN_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(input).map(|lexeme| (pattern.class(), lexeme)))
}
