use std::fmt::Display;

use crate::errors::errors::Error;

use super::{
    expressions::{BinaryExpr, BooleanExpr, IfExpr, IntegerExpr, PrefixExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
};

/// Anything that may appear at program or block level.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Anything that produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Symbol(SymbolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    If(IfExpr),
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Symbol(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Binary(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
        }
    }
}

impl Expr {
    /// Wraps the expression in an expression statement.
    pub fn into_stmt(self) -> Stmt {
        Stmt::Expression(ExpressionStmt { expression: self })
    }
}

/// Result of one parse: the statements that parsed and every error met
/// along the way, both in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub errors: Vec<Error>,
}

impl Program {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
