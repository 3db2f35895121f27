use log::trace;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{PrefixExpr, PrefixOperator},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::object::Object;

/// Anything that can be reduced to an `Object`.
pub trait Eval {
    fn eval(&self) -> Result<Object, Error>;
}

fn not_implemented(node: &str) -> Error {
    Error::new(
        ErrorImpl::NotImplementedError {
            node: node.to_string(),
        },
        Position::null(),
    )
}

impl Eval for Program {
    /// The value of the last statement, `Null` for an empty program.
    fn eval(&self) -> Result<Object, Error> {
        let mut result = Object::Null;

        for stmt in &self.statements {
            result = stmt.eval()?;
        }

        Ok(result)
    }
}

impl Eval for Stmt {
    fn eval(&self) -> Result<Object, Error> {
        match self {
            Stmt::Expression(stmt) => stmt.expression.eval(),
            Stmt::VarDecl(_) => Err(not_implemented("var statement")),
            Stmt::Return(_) => Err(not_implemented("return statement")),
            Stmt::Block(_) => Err(not_implemented("block statement")),
        }
    }
}

impl Eval for Expr {
    fn eval(&self) -> Result<Object, Error> {
        trace!("evaluating {}", self);

        match self {
            Expr::Integer(integer) => Ok(Object::Integer(integer.value)),
            Expr::Boolean(boolean) => Ok(Object::Boolean(boolean.value)),
            Expr::Prefix(prefix) => eval_prefix(prefix),
            Expr::Symbol(_) => Err(not_implemented("identifier")),
            Expr::Binary(_) => Err(not_implemented("infix expression")),
            Expr::If(_) => Err(not_implemented("if expression")),
        }
    }
}

fn eval_prefix(prefix: &PrefixExpr) -> Result<Object, Error> {
    let right = prefix.right_expr.eval()?;

    Ok(match prefix.operator {
        PrefixOperator::Not => eval_not(right),
        PrefixOperator::Negate => eval_negate(right),
    })
}

fn eval_not(right: Object) -> Object {
    match right {
        Object::Boolean(value) => Object::Boolean(!value),
        Object::Null => Object::TRUE,
        _ => Object::FALSE,
    }
}

fn eval_negate(right: Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(value.wrapping_neg()),
        _ => Object::Null,
    }
}
