use std::{rc::Rc, slice::Iter};

use super::{expressions::Expr, types::BasicType};

/// Program
/// The root node: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
    /// Name of the source the program was parsed from
    pub file: Rc<String>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn line(&self) -> u32 {
        match self {
            Stmt::VarDecl(var_decl) => var_decl.line,
            Stmt::Assignment(assignment) => assignment.line,
            Stmt::Print(print) => print.line,
        }
    }
}

/// `int x = expr;` - `line` is the line of the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: BasicType,
    pub assigned_value: Expr,
    pub line: u32,
}

/// `x = expr;` - `line` is the line of the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub assignee: String,
    pub value: Expr,
    pub line: u32,
}

/// `print(expr);` or `print("text");` - `line` is the line of the `print` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
    pub line: u32,
}
