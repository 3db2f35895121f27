use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::{Symbol, Token, TokenClass},
};

use super::{
    expr::*,
    parser::{ParseResult, Parser},
    stmt::*,
};

/// Operator precedence, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    Comparison,
    Sum,
    Product,
    Prefix,
    // Reserved for calls, nothing binds this tightly yet
    Call,
}

/// What a lookup table is keyed on: a specific symbol where the token
/// spells one, otherwise its class.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum LookupKey {
    Class(TokenClass),
    Symbol(Symbol),
}

impl LookupKey {
    pub fn of(token: &Token) -> LookupKey {
        token
            .symbol()
            .map(LookupKey::Symbol)
            .unwrap_or(LookupKey::Class(token.class))
    }
}

impl From<Symbol> for LookupKey {
    fn from(symbol: Symbol) -> Self {
        LookupKey::Symbol(symbol)
    }
}

impl From<TokenClass> for LookupKey {
    fn from(class: TokenClass) -> Self {
        LookupKey::Class(class)
    }
}

pub type StmtHandler = fn(&mut Parser<'_>) -> ParseResult<Stmt>;
pub type NUDHandler = fn(&mut Parser<'_>) -> ParseResult<Expr>;
pub type LEDHandler = fn(&mut Parser<'_>, ParseResult<Expr>, BindingPower) -> ParseResult<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.led(Symbol::Equals, BindingPower::Equals, parse_binary_expr);
    parser.led(Symbol::NotEquals, BindingPower::Equals, parse_binary_expr);

    // Comparison
    parser.led(Symbol::Less, BindingPower::Comparison, parse_binary_expr);
    parser.led(Symbol::LessEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(Symbol::Greater, BindingPower::Comparison, parse_binary_expr);
    parser.led(Symbol::GreaterEquals, BindingPower::Comparison, parse_binary_expr);

    // Additive and multiplicative
    parser.led(Symbol::Plus, BindingPower::Sum, parse_binary_expr);
    parser.led(Symbol::Dash, BindingPower::Sum, parse_binary_expr);
    parser.led(Symbol::Star, BindingPower::Product, parse_binary_expr);
    parser.led(Symbol::Slash, BindingPower::Product, parse_binary_expr);

    // Literals, symbols and prefixes
    parser.nud(TokenClass::Number, parse_integer_expr);
    parser.nud(TokenClass::Boolean, parse_boolean_expr);
    parser.nud(TokenClass::Identifier, parse_symbol_expr);
    parser.nud(Symbol::Not, parse_prefix_expr);
    parser.nud(Symbol::Dash, parse_prefix_expr);
    parser.nud(Symbol::OpenParen, parse_grouping_expr);
    parser.nud(Symbol::If, parse_if_expr);

    // Statements
    parser.stmt(Symbol::Var, parse_var_decl_stmt);
    parser.stmt(Symbol::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<LookupKey, StmtHandler>;
pub type NUDLookup = HashMap<LookupKey, NUDHandler>;
pub type LEDLookup = HashMap<LookupKey, LEDHandler>;
pub type BPLookup = HashMap<LookupKey, BindingPower>;
