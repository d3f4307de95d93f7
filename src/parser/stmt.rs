use crate::{
    ast::{
        expressions::{Expr, LiteralExpr},
        statements::{AssignmentStmt, PrintStmt, Stmt, VarDeclStmt},
        types::{BasicType, Value},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let stmt_fn = match parser.current_token() {
        None => return Err(parser.unexpected_end()),
        Some(token) => match parser.get_stmt_lookup().get(&token.kind) {
            Some(stmt_fn) => *stmt_fn,
            None => return Err(parser.unexpected_token(token)),
        },
    };

    stmt_fn(parser)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let type_token = parser.advance()?;
    let explicit_type = match type_token.kind {
        TokenKind::Int => BasicType::Int,
        TokenKind::Float => BasicType::Float,
        _ => return Err(parser.unexpected_token(&type_token)),
    };

    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let assigned_value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Some(Stmt::VarDecl(VarDeclStmt {
        identifier: identifier.value,
        explicit_type,
        assigned_value,
        line: identifier.line,
    })))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let assignee = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Some(Stmt::Assignment(AssignmentStmt {
        assignee: assignee.value,
        value,
        line: assignee.line,
    })))
}

/// `print(expr);` or `print("text");`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let print_token = parser.expect(TokenKind::Print)?;
    parser.expect(TokenKind::OpenParen)?;

    let expression = if parser.current_token_kind() == Some(TokenKind::String) {
        let text = parser.advance()?;
        Expr::Literal(LiteralExpr {
            value: Value::String(text.value),
            line: print_token.line,
        })
    } else {
        parse_expr(parser, BindingPower::Default)?
    };

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Some(Stmt::Print(PrintStmt {
        expression,
        line: print_token.line,
    })))
}

/// A lone `;` is accepted and produces no statement.
pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.expect(TokenKind::Semicolon)?;
    Ok(None)
}
