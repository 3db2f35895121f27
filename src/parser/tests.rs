//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Variable declarations and returns
//! - Prefix, binary and grouped expressions, and their precedence
//! - Conditional expressions and blocks
//! - Error recording and recovery

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{IfExpr, InfixOperator, PrefixOperator},
        statements::VarDeclStmt,
    },
    lexer::lexer::tokenize,
};

use super::{
    lookups::{create_token_lookups, BindingPower},
    parser::{parse, Parser},
};

fn parse_source(source: &str) -> Program {
    parse(&tokenize(source))
}

fn assert_no_errors(program: &Program) {
    assert!(
        program.errors.is_empty(),
        "no errors were expected, got {:?}",
        program.errors
    );
}

fn error_names(program: &Program) -> Vec<&str> {
    program.errors.iter().map(|e| e.get_error_name()).collect()
}

fn expression(stmt: &Stmt) -> &Expr {
    match stmt {
        Stmt::Expression(stmt) => &stmt.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn var_decl(stmt: &Stmt) -> &VarDeclStmt {
    match stmt {
        Stmt::VarDecl(stmt) => stmt,
        other => panic!("expected var statement, got {:?}", other),
    }
}

fn if_expr(expr: &Expr) -> &IfExpr {
    match expr {
        Expr::If(expr) => expr,
        other => panic!("expected if expression, got {:?}", other),
    }
}

fn assert_integer(expr: &Expr, expected: i64) {
    match expr {
        Expr::Integer(integer) => assert_eq!(integer.value, expected),
        other => panic!("expected integer, got {:?}", other),
    }
}

fn assert_boolean(expr: &Expr, expected: bool) {
    match expr {
        Expr::Boolean(boolean) => assert_eq!(boolean.value, expected),
        other => panic!("expected boolean, got {:?}", other),
    }
}

fn assert_symbol(expr: &Expr, expected: &str) {
    match expr {
        Expr::Symbol(symbol) => assert_eq!(symbol.value, expected),
        other => panic!("expected identifier, got {:?}", other),
    }
}

fn assert_binary(expr: &Expr, operator: InfixOperator) -> (&Expr, &Expr) {
    match expr {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, operator);
            (&binary.left, &binary.right)
        }
        other => panic!("expected binary expression, got {:?}", other),
    }
}

fn assert_prefix(expr: &Expr, operator: PrefixOperator) -> &Expr {
    match expr {
        Expr::Prefix(prefix) => {
            assert_eq!(prefix.operator, operator);
            &prefix.right_expr
        }
        other => panic!("expected prefix expression, got {:?}", other),
    }
}

#[test]
fn test_parse_var_declaration() {
    let program = parse_source("var foo = 123;");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);

    let stmt = var_decl(&program.statements[0]);
    assert_eq!(stmt.identifier, "foo");
    assert_integer(stmt.assigned_value.as_ref().unwrap(), 123);
}

#[test]
fn test_parse_multiple_var_declarations() {
    let program = parse_source("var foo = 123;\n\tvar asd = 3;");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(var_decl(&program.statements[0]).identifier, "foo");
    assert_eq!(var_decl(&program.statements[1]).identifier, "asd");
    assert_integer(var_decl(&program.statements[1]).assigned_value.as_ref().unwrap(), 3);
}

#[test]
fn test_parse_var_without_assignment() {
    let program = parse_source("var asd;");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);

    let stmt = var_decl(&program.statements[0]);
    assert_eq!(stmt.identifier, "asd");
    assert!(stmt.assigned_value.is_none());
}

#[test]
fn test_parse_var_with_identifier_value() {
    let program = parse_source("var foo = asd;");

    assert_no_errors(&program);
    assert_symbol(var_decl(&program.statements[0]).assigned_value.as_ref().unwrap(), "asd");
}

#[test]
fn test_parse_var_with_booleans() {
    for (source, expected) in [("var foo = true;", true), ("var foo = false;", false)] {
        let program = parse_source(source);

        assert_no_errors(&program);
        assert_eq!(program.statements.len(), 1);
        assert_boolean(var_decl(&program.statements[0]).assigned_value.as_ref().unwrap(), expected);
    }
}

#[test]
fn test_parse_return_statement() {
    let program = parse_source("return 123;");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Stmt::Return(stmt) => assert_integer(&stmt.value, 123),
        other => panic!("expected return statement, got {:?}", other),
    }
}

#[test]
fn test_parse_invalid_var_statements() {
    for source in ["var asd = ;", "var return 123;", "var foo = "] {
        let program = parse_source(source);
        assert!(!program.errors.is_empty(), "expected errors for {:?}", source);
        assert!(
            !program.statements.iter().any(|s| matches!(s, Stmt::VarDecl(_))),
            "expected no var statements for {:?}",
            source
        );
    }
}

#[test]
fn test_parse_keyword_as_var_name() {
    let program = parse_source("var return 123;");

    // The var statement is abandoned and parsing resumes on `return`
    assert_eq!(error_names(&program), vec!["ExpectedIdentifier"]);
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(program.statements[0], Stmt::Return(_)));
}

#[test]
fn test_parse_missing_assignment_is_one_error() {
    let program = parse_source("var asd 4;");

    // `4;` parses on its own once the var statement is abandoned
    assert_eq!(error_names(&program), vec!["ExpectedAssignment"]);
    assert_eq!(program.statements.len(), 1);
    assert_integer(expression(&program.statements[0]), 4);
}

#[test]
fn test_parse_invalid_var_statements_error_count() {
    let program = parse_source("var asd 4;\n\tvar = 432;\n\tvar x = foo");

    assert_eq!(
        error_names(&program),
        vec![
            "ExpectedAssignment",
            "ExpectedIdentifier",
            "NoPrefixHandler",
            "MissingSemicolon"
        ]
    );
}

#[test]
fn test_parse_unterminated_var_then_empty_var() {
    let program = parse_source("var asd = 4\n\tvar asd = ;");

    assert_eq!(program.errors.len(), 3);
    assert_eq!(program.errors[0].get_error_name(), "MissingSemicolon");
}

#[test]
fn test_parse_missing_semicolon_after_return() {
    let program = parse_source("return 1");

    assert_eq!(error_names(&program), vec!["MissingSemicolon"]);
    assert!(program.statements.is_empty());
}

#[test]
fn test_parse_expression_statement() {
    let program = parse_source("foobar;");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);
    assert_symbol(expression(&program.statements[0]), "foobar");
}

#[test]
fn test_parse_expression_statement_without_semicolon() {
    let program = parse_source("foo bar");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 2);
    assert_symbol(expression(&program.statements[1]), "bar");
}

#[test]
fn test_parse_prefix_expression() {
    let program = parse_source("-5;");

    assert_no_errors(&program);
    let right = assert_prefix(expression(&program.statements[0]), PrefixOperator::Negate);
    assert_integer(right, 5);
}

#[test]
fn test_parse_prefix_booleans() {
    for (source, expected) in [("!true;", true), ("!false;", false)] {
        let program = parse_source(source);

        assert_no_errors(&program);
        let right = assert_prefix(expression(&program.statements[0]), PrefixOperator::Not);
        assert_boolean(right, expected);
    }
}

#[test]
fn test_parse_infix_integers() {
    let cases = [
        ("1+2;", 1, InfixOperator::Plus, 2),
        ("1 + 2;", 1, InfixOperator::Plus, 2),
        ("1*2;", 1, InfixOperator::Multiply, 2),
        ("1 - 2;", 1, InfixOperator::Minus, 2),
        ("4/2;", 4, InfixOperator::Divide, 2),
        ("3 == 4;", 3, InfixOperator::Equals, 4),
        ("3 != 4;", 3, InfixOperator::NotEquals, 4),
        ("3 > 4;", 3, InfixOperator::Greater, 4),
        ("3 >= 4;", 3, InfixOperator::GreaterEquals, 4),
        ("3 < 4;", 3, InfixOperator::Less, 4),
        ("3 <= 4;", 3, InfixOperator::LessEquals, 4),
    ];

    for (source, l, operator, r) in cases {
        let program = parse_source(source);
        assert_no_errors(&program);
        assert_eq!(program.statements.len(), 1, "{}", source);

        let (left, right) = assert_binary(expression(&program.statements[0]), operator);
        assert_integer(left, l);
        assert_integer(right, r);
    }
}

#[test]
fn test_parse_infix_booleans() {
    let cases = [
        ("true == true;", true, InfixOperator::Equals, true),
        ("true != false;", true, InfixOperator::NotEquals, false),
        ("false == false;", false, InfixOperator::Equals, false),
    ];

    for (source, left, operator, right) in cases {
        let program = parse_source(source);
        assert_no_errors(&program);

        let (l, r) = assert_binary(expression(&program.statements[0]), operator);
        assert_boolean(l, left);
        assert_boolean(r, right);
    }
}

#[test]
fn test_parse_nested_binary_structure() {
    let program = parse_source("foo + 5 * 3;");
    assert_no_errors(&program);

    let (left, right) = assert_binary(expression(&program.statements[0]), InfixOperator::Plus);
    assert_symbol(left, "foo");

    let (l, r) = assert_binary(right, InfixOperator::Multiply);
    assert_integer(l, 5);
    assert_integer(r, 3);
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("foo + 5 * 3;", "(foo+(5*3))"),
        ("foo + 5 * 3 * 1;", "(foo+((5*3)*1))"),
        ("foo + 5 + 3 * 1;", "((foo+5)+(3*1))"),
        ("foo + 5 * 3 + 1;", "((foo+(5*3))+1)"),
        ("-a *b;", "((-a)*b)"),
        ("!-b;", "(!(-b))"),
        ("a+b-c;", "((a+b)-c)"),
        ("a+b/c;", "(a+(b/c))"),
        ("a + b * c + d / e - f;", "(((a+(b*c))+(d/e))-f)"),
        ("3 + 4; -5 * 5;", "(3+4)((-5)*5)"),
        ("5 > 4 == 3 < 4;", "((5>4)==(3<4))"),
        ("5 < 4 != 3 > 4;", "((5<4)!=(3>4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5;", "((3+(4*5))==((3*1)+(4*5)))"),
        ("true;", "true"),
        ("false;", "false"),
        ("3 > 5 == true;", "((3>5)==true)"),
        ("(2 + 3) + 4;", "((2+3)+4)"),
        ("1 + (2 + 3) + 4;", "((1+(2+3))+4)"),
        ("(5 + 5) * 2;", "((5+5)*2)"),
        ("2 / (5 + 5);", "(2/(5+5))"),
        ("-(5 + 5);", "(-(5+5))"),
        ("!(true == true);", "(!(true==true))"),
        ("a == b == c;", "((a==b)==c)"),
        ("a * b / c;", "((a*b)/c)"),
        ("((a));", "a"),
    ];

    for (source, expected) in cases {
        let program = parse_source(source);
        assert_no_errors(&program);
        assert_eq!(program.to_string(), expected, "{}", source);
    }
}

#[test]
fn test_serialization_reparses_to_itself() {
    let sources = [
        "a + b * c + d / e - f;",
        "-a * !b;",
        "1 + (2 + 3) + 4;",
        "var x = (1 + 2) * 3;",
        "var y;",
        "return -(5 + 5);",
        "if (x < y) { x } else { y }",
        "if (a) { b; c }",
        "3 > 5 == true;",
    ];

    for source in sources {
        let program = parse_source(source);
        assert_no_errors(&program);

        for stmt in &program.statements {
            let printed = stmt.to_string();
            let reparsed = parse_source(&printed);

            assert_no_errors(&reparsed);
            assert_eq!(reparsed.statements.len(), 1, "{}", printed);
            assert_eq!(reparsed.statements[0].to_string(), printed);
        }
    }
}

#[test]
fn test_parse_if_without_else() {
    let program = parse_source("if (x < y) { x }");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);

    let expr = if_expr(expression(&program.statements[0]));
    let (left, right) = assert_binary(&expr.condition, InfixOperator::Less);
    assert_symbol(left, "x");
    assert_symbol(right, "y");

    assert_eq!(expr.consequence.len(), 1);
    assert_symbol(expression(&expr.consequence.body[0]), "x");
    assert!(expr.alternative.is_none());
}

#[test]
fn test_parse_if_with_else() {
    let program = parse_source("if (x < y) { x } else {y}");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);

    let expr = if_expr(expression(&program.statements[0]));
    assert_binary(&expr.condition, InfixOperator::Less);

    let alternative = expr.alternative.as_ref().unwrap();
    assert_eq!(expr.consequence.len(), 1);
    assert_eq!(alternative.len(), 1);
    assert_symbol(expression(&expr.consequence.body[0]), "x");
    assert_symbol(expression(&alternative.body[0]), "y");

    assert_eq!(program.to_string(), "if (x<y) {x} else {y}");
}

#[test]
fn test_parse_if_with_statements_in_blocks() {
    let program = parse_source("if (ok) { var a = 1; return a; } else { }");

    assert_no_errors(&program);

    let expr = if_expr(expression(&program.statements[0]));
    assert_symbol(&expr.condition, "ok");
    assert_eq!(expr.consequence.len(), 2);
    assert!(matches!(expr.consequence.body[0], Stmt::VarDecl(_)));
    assert!(matches!(expr.consequence.body[1], Stmt::Return(_)));
    assert!(expr.alternative.as_ref().unwrap().is_empty());
}

#[test]
fn test_parse_if_followed_by_statement() {
    let program = parse_source("if (a) { b } c;");

    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 2);
    assert_symbol(expression(&program.statements[1]), "c");
}

#[test]
fn test_parse_unclosed_block_ends_at_eof() {
    let program = parse_source("if (x) { x");

    // A block without `}` simply stops at the end of input
    assert_no_errors(&program);
    assert_eq!(program.statements.len(), 1);
    assert_eq!(if_expr(expression(&program.statements[0])).consequence.len(), 1);
}

#[test]
fn test_parse_if_missing_parens() {
    let program = parse_source("if x { x }");
    assert_eq!(program.errors[0].get_error_name(), "MissingOpeningParen");

    let program = parse_source("if (x { x }");
    assert!(error_names(&program).contains(&"MissingClosingParen"));
}

#[test]
fn test_parse_if_missing_curly() {
    let program = parse_source("if (x) y");
    assert_eq!(program.errors[0].get_error_name(), "MissingOpeningCurly");

    let program = parse_source("if (x) { y } else z");
    assert_eq!(program.errors[0].get_error_name(), "MissingOpeningCurly");
    assert!(program.errors[0].to_string().starts_with("else expression"));
}

#[test]
fn test_parse_grouping_missing_paren() {
    let program = parse_source("(1 + 2;");

    assert_eq!(error_names(&program), vec!["MissingClosingParen"]);
    assert!(program.statements.is_empty());
}

#[test]
fn test_parse_invalid_numbers() {
    for source in ["654.1;", "99999999999999999999;"] {
        let program = parse_source(source);

        assert_eq!(error_names(&program), vec!["NumberParseError"], "{}", source);
        assert!(program.statements.is_empty());
    }
}

#[test]
fn test_parse_no_prefix_handler() {
    let program = parse_source("* 3;");

    assert_eq!(program.errors[0].get_error_name(), "NoPrefixHandler");
    assert_eq!(program.statements.len(), 1);
    assert_integer(expression(&program.statements[0]), 3);
}

#[test]
fn test_parse_recovers_after_error() {
    let program = parse_source("var = 1; var ok = 2;");

    assert!(!program.errors.is_empty());
    assert!(program
        .statements
        .iter()
        .any(|stmt| matches!(stmt, Stmt::VarDecl(v) if v.identifier == "ok")));
}

#[test]
fn test_error_positions_point_at_tokens() {
    let program = parse_source("var x = 1\nvar y = 2;");

    // The missing semicolon is reported at the token found instead
    assert_eq!(program.errors[0].get_position().0, 10);
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("");

    assert_no_errors(&program);
    assert!(program.statements.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_parse_empty_token_slice() {
    let program = parse(&[]);

    assert_no_errors(&program);
    assert!(program.statements.is_empty());
}

#[test]
fn test_parser_window() {
    let tokens = tokenize("a b");
    let mut parser = Parser::new(&tokens);
    create_token_lookups(&mut parser);

    assert_eq!(parser.current_token().value, "a");
    assert_eq!(parser.next_token().value, "b");

    parser.advance();
    parser.advance();
    assert!(parser.at_eof());
    assert!(parser.next_token().is_eof());

    parser.advance();
    assert!(parser.current_token().is_eof());
    assert!(parser.get_errors().is_empty());
}

#[test]
fn test_binding_power_order() {
    assert!(BindingPower::Lowest < BindingPower::Equals);
    assert!(BindingPower::Equals < BindingPower::Comparison);
    assert!(BindingPower::Comparison < BindingPower::Sum);
    assert!(BindingPower::Sum < BindingPower::Product);
    assert!(BindingPower::Product < BindingPower::Prefix);
    assert!(BindingPower::Prefix < BindingPower::Call);
}
