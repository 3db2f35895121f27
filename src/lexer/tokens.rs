use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Lexemes with a fixed meaning, mapped to the symbol they spell.
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, Symbol> = {
        let mut map = HashMap::new();
        map.insert("if", Symbol::If);
        map.insert("else", Symbol::Else);
        map.insert("for", Symbol::For);
        map.insert("var", Symbol::Var);
        map.insert("return", Symbol::Return);
        map.insert("fn", Symbol::Fn);

        map.insert("==", Symbol::Equals);
        map.insert("!=", Symbol::NotEquals);
        map.insert("++", Symbol::PlusPlus);
        map.insert("+", Symbol::Plus);
        map.insert("--", Symbol::MinusMinus);
        map.insert("-", Symbol::Dash);
        map.insert("*", Symbol::Star);
        map.insert("/", Symbol::Slash);
        map.insert("<=", Symbol::LessEquals);
        map.insert(">=", Symbol::GreaterEquals);
        map.insert("<", Symbol::Less);
        map.insert(">", Symbol::Greater);
        map.insert("!", Symbol::Not);

        map.insert("=", Symbol::Assignment);
        map.insert(";", Symbol::Semicolon);
        map.insert("(", Symbol::OpenParen);
        map.insert(")", Symbol::CloseParen);
        map.insert("{", Symbol::OpenCurly);
        map.insert("}", Symbol::CloseCurly);
        map
    };
}

/// Lexical category of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenClass {
    Whitespace,
    Keyword,
    Identifier,
    Number,
    Boolean,
    Operator,

    OpenParam,
    CloseParam,
    Semicolon,
    Assignment,
    EOF,
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A specific keyword, operator or punctuation mark.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    // Keywords
    If,
    Else,
    For,
    Var,
    Return,
    Fn,

    // Operators
    Equals,
    NotEquals,
    PlusPlus,
    Plus,
    MinusMinus,
    Dash,
    Star,
    Slash,
    LessEquals,
    GreaterEquals,
    Less,
    Greater,
    Not,

    Assignment,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
}

impl Symbol {
    /// The class a token must have to spell this symbol.
    pub fn class(&self) -> TokenClass {
        match self {
            Symbol::If | Symbol::Else | Symbol::For | Symbol::Var | Symbol::Return | Symbol::Fn => {
                TokenClass::Keyword
            }
            Symbol::Equals
            | Symbol::NotEquals
            | Symbol::PlusPlus
            | Symbol::Plus
            | Symbol::MinusMinus
            | Symbol::Dash
            | Symbol::Star
            | Symbol::Slash
            | Symbol::LessEquals
            | Symbol::GreaterEquals
            | Symbol::Less
            | Symbol::Greater
            | Symbol::Not => TokenClass::Operator,
            Symbol::Assignment => TokenClass::Assignment,
            Symbol::Semicolon => TokenClass::Semicolon,
            Symbol::OpenParen | Symbol::OpenCurly => TokenClass::OpenParam,
            Symbol::CloseParen | Symbol::CloseCurly => TokenClass::CloseParam,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub class: TokenClass,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} {:?}}}", self.class, self.value)
    }
}

impl Token {
    /// The symbol this token spells, if its class agrees with the lexeme.
    ///
    /// An identifier that happens to read `if` has no symbol.
    pub fn symbol(&self) -> Option<Symbol> {
        SYMBOL_LOOKUP
            .get(self.value.as_str())
            .copied()
            .filter(|symbol| symbol.class() == self.class)
    }

    pub fn is(&self, symbol: Symbol) -> bool {
        self.symbol() == Some(symbol)
    }

    pub fn is_class(&self, class: TokenClass) -> bool {
        self.class == class
    }

    pub fn is_eof(&self) -> bool {
        self.class == TokenClass::EOF
    }

    /// The lexeme, or a readable stand-in for the empty EOF lexeme.
    pub fn describe(&self) -> &str {
        if self.is_eof() {
            "end of input"
        } else {
            &self.value
        }
    }
}
