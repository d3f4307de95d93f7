use std::fmt::Display;

use super::types::Value;

/// Expression node. Every variant records the line of the token that defines it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
}

impl Expr {
    pub fn line(&self) -> u32 {
        match self {
            Expr::Literal(literal) => literal.line,
            Expr::Symbol(symbol) => symbol.line,
            Expr::Binary(binary) => binary.line,
            Expr::Prefix(prefix) => prefix.line,
        }
    }
}

/// Literal Expression
/// A number, decimal or string literal; the value carries its own type.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Value,
    pub line: u32,
}

/// Symbol Expression
/// A reference to a variable, resolved through the execution context.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

/// Binary Expression
/// `line` is the line of the operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Negate,
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixOperator::Negate => write!(f, "-"),
        }
    }
}

/// Prefix Expression
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: PrefixOperator,
    pub right_expr: Box<Expr>,
    pub line: u32,
}
