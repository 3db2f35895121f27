use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Symbol, TokenClass},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{
    lookups::LookupKey,
    parser::{ParseResult, Parser},
};

pub fn parse_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let key = LookupKey::of(parser.current_token());
    if let Some(handler) = parser.get_stmt_lookup().get(&key).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// An expression with an optional trailing semicolon.
pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let expr = parse_expr(parser, BindingPower::Lowest);

    if parser.next_token().is(Symbol::Semicolon) {
        parser.advance();
    }

    Ok(expr?.into_stmt())
}

/// `var name;` or `var name = expr;`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    if !parser.next_token().is_class(TokenClass::Identifier) {
        let token = parser.next_token().describe().to_string();
        return parser.fail_at_next(ErrorImpl::ExpectedIdentifier { token });
    }
    parser.advance();
    let identifier = parser.current_token().value.clone();

    if parser.next_token().is(Symbol::Semicolon) {
        parser.advance();
        return Ok(Stmt::VarDecl(VarDeclStmt {
            identifier,
            assigned_value: None,
        }));
    }

    parser.expect_next(Symbol::Assignment, |token| ErrorImpl::ExpectedAssignment { token })?;
    parser.advance();

    let assigned_value = parse_expr(parser, BindingPower::Lowest);

    parser.expect_next(Symbol::Semicolon, |token| ErrorImpl::MissingSemicolon {
        context: String::from("var"),
        token,
    })?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        assigned_value: Some(assigned_value?),
    }))
}

/// `return expr;`
pub fn parse_return_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);

    parser.expect_next(Symbol::Semicolon, |token| ErrorImpl::MissingSemicolon {
        context: String::from("return"),
        token,
    })?;

    Ok(Stmt::Return(ReturnStmt { value: value? }))
}

/// Statements up to the closing curly brace, starting on the opening one.
///
/// Running out of input also ends the block; a missing `}` is not reported.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_token().is(Symbol::CloseCurly) && !parser.at_eof() {
        if let Ok(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { body }
}
