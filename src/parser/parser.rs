//! Parser state and the top-level parse loop.
//!
//! The parser walks a borrowed token stream with a two token window: the
//! current token and the one after it. Every handler leaves the cursor on
//! the last token it consumed, and the statement loop steps past it.
//!
//! Failures never stop the parse. A handler records a descriptive error,
//! returns `Err(Reported)` for the node it was building, and the loop
//! carries on from wherever the cursor stopped. One bad statement can
//! therefore cause a short cascade of follow-up errors.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Symbol, Token, TokenClass},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, LookupKey,
        NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Marker for a node whose error has already been recorded on the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported;

pub type ParseResult<T> = Result<T, Reported>;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The token stream, never modified
    tokens: &'a [Token],
    /// Index of the current token
    pos: usize,
    /// Stands in for every position past the end of the stream
    eof: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first token, with empty lookups.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = tokens
            .last()
            .filter(|token| token.is_eof())
            .cloned()
            .unwrap_or_else(|| {
                MK_TOKEN!(
                    TokenClass::EOF,
                    String::new(),
                    Span {
                        start: Position::null(),
                        end: Position::null()
                    }
                )
            });

        Parser {
            tokens,
            pos: 0,
            eof,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Returns the lookahead token without advancing.
    pub fn next_token(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eof)
    }

    /// Moves the window one token forward.
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn at_eof(&self) -> bool {
        self.current_token().is_eof()
    }

    /// Checks the current token, then steps past it.
    pub fn expect_current(
        &mut self,
        symbol: Symbol,
        error: impl FnOnce(String) -> ErrorImpl,
    ) -> ParseResult<()> {
        if !self.current_token().is(symbol) {
            let token = self.current_token().describe().to_string();
            return self.fail_at_current(error(token));
        }

        self.advance();
        Ok(())
    }

    /// Checks the lookahead token, then makes it the current one.
    pub fn expect_next(
        &mut self,
        symbol: Symbol,
        error: impl FnOnce(String) -> ErrorImpl,
    ) -> ParseResult<()> {
        if !self.next_token().is(symbol) {
            let token = self.next_token().describe().to_string();
            return self.fail_at_next(error(token));
        }

        self.advance();
        Ok(())
    }

    /// Records an error at the current token.
    pub fn fail_at_current<T>(&mut self, error: ErrorImpl) -> ParseResult<T> {
        let position = self.current_token().span.start.clone();
        self.record(Error::new(error, position))
    }

    /// Records an error at the lookahead token.
    pub fn fail_at_next<T>(&mut self, error: ErrorImpl) -> ParseResult<T> {
        let position = self.next_token().span.start.clone();
        self.record(Error::new(error, position))
    }

    fn record<T>(&mut self, error: Error) -> ParseResult<T> {
        debug!("parse error: {}", error);

        self.errors.push(error);
        Err(Reported)
    }

    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of `token` as an infix operator, `Lowest` if it is not one.
    pub fn binding_power(&self, token: &Token) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&LookupKey::of(token))
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, key: impl Into<LookupKey>, binding_power: BindingPower, led_fn: LEDHandler) {
        let key = key.into();
        self.binding_power_lookup.insert(key, binding_power);
        self.led_lookup.insert(key, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, key: impl Into<LookupKey>, nud_fn: NUDHandler) {
        self.nud_lookup.insert(key.into(), nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, key: impl Into<LookupKey>, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(key.into(), stmt_fn);
    }
}

/// Parses a token stream into a Program.
///
/// Every statement that parses is kept and every error is collected; the
/// parse always runs to the end of the stream.
pub fn parse(tokens: &[Token]) -> Program {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    debug!("parsing {} tokens", tokens.len());

    let mut statements = vec![];

    while !parser.at_eof() {
        if let Ok(stmt) = parse_stmt(&mut parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    debug!(
        "parsed {} statements with {} errors",
        statements.len(),
        parser.errors.len()
    );

    Program {
        statements,
        errors: parser.errors,
    }
}
