use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BooleanExpr, IfExpr, InfixOperator, IntegerExpr, PrefixExpr,
            PrefixOperator, SymbolExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::Symbol,
};

use super::{
    lookups::{BindingPower, LookupKey},
    parser::{ParseResult, Parser},
    stmt::parse_block_stmt,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Starts on the expression's first token and stops on its last one.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    // First parse NUD
    let key = LookupKey::of(parser.current_token());
    let Some(nud) = parser.get_nud_lookup().get(&key).copied() else {
        let token = parser.current_token().describe().to_string();
        return parser.fail_at_current(ErrorImpl::NoPrefixHandler { token });
    };

    let mut left = nud(parser);

    // While the lookahead binds tighter than `bp`, fold it into lhs. A failed
    // operand does not stop the loop, so the cursor ends up in the same place
    // either way.
    while !parser.next_token().is(Symbol::Semicolon)
        && bp < parser.binding_power(parser.next_token())
    {
        let key = LookupKey::of(parser.next_token());
        let Some(led) = parser.get_led_lookup().get(&key).copied() else {
            return left;
        };

        let operator_bp = parser.binding_power(parser.next_token());
        parser.advance();
        left = led(parser, left, operator_bp);
    }

    left
}

pub fn parse_integer_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().value.clone();

    match token.parse() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { value })),
        Err(_) => parser.fail_at_current(ErrorImpl::NumberParseError { token }),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().value.clone();

    match token.parse() {
        Ok(value) => Ok(Expr::Boolean(BooleanExpr { value })),
        Err(_) => parser.fail_at_current(ErrorImpl::BooleanParseError { token }),
    }
}

pub fn parse_symbol_expr(parser: &mut Parser) -> ParseResult<Expr> {
    Ok(Expr::Symbol(SymbolExpr {
        value: parser.current_token().value.clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let Some(operator) = parser
        .current_token()
        .symbol()
        .and_then(PrefixOperator::from_symbol)
    else {
        let token = parser.current_token().describe().to_string();
        return parser.fail_at_current(ErrorImpl::NoPrefixHandler { token });
    };

    parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        right_expr: Box::new(rhs),
    }))
}

/// Folds `left <op> right`, parsing the right side at the operator's own
/// power so equal-precedence chains group to the left.
pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ParseResult<Expr>,
    bp: BindingPower,
) -> ParseResult<Expr> {
    let Some(operator) = parser
        .current_token()
        .symbol()
        .and_then(InfixOperator::from_symbol)
    else {
        let token = parser.current_token().describe().to_string();
        return parser.fail_at_current(ErrorImpl::UnexpectedToken { token });
    };

    parser.advance();
    let right = parse_expr(parser, bp);

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left?),
        operator,
        right: Box::new(right?),
    }))
}

/// `( expr )`. The closing paren is checked on the lookahead after the
/// inner expression and becomes the current token.
pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);

    parser.expect_next(Symbol::CloseParen, |token| ErrorImpl::MissingClosingParen {
        context: String::from("grouped expression"),
        token,
    })?;

    expr
}

/// `if (cond) { ... }` with an optional `else { ... }`.
///
/// The condition is parsed from the opening paren itself, so it goes
/// through the grouping handler and the cursor lands on `)`.
pub fn parse_if_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.expect_next(Symbol::OpenParen, |token| ErrorImpl::MissingOpeningParen {
        context: String::from("if expression"),
        token,
    })?;

    let condition = parse_expr(parser, BindingPower::Lowest);

    parser.expect_current(Symbol::CloseParen, |token| ErrorImpl::MissingClosingParen {
        context: String::from("if expression"),
        token,
    })?;

    if !parser.current_token().is(Symbol::OpenCurly) {
        let token = parser.current_token().describe().to_string();
        return parser.fail_at_current(ErrorImpl::MissingOpeningCurly {
            context: String::from("if expression"),
            token,
        });
    }

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.next_token().is(Symbol::Else) {
        parser.advance();
        parser.expect_next(Symbol::OpenCurly, |token| ErrorImpl::MissingOpeningCurly {
            context: String::from("else expression"),
            token,
        })?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition?),
        consequence,
        alternative,
    }))
}
