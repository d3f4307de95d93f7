use crate::{
    ast::{
        expressions::{
            BinaryExpr, BinaryOperator, Expr, LiteralExpr, PrefixExpr, PrefixOperator, SymbolExpr,
        },
        types::Value,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud_fn = match parser.current_token() {
        None => return Err(parser.unexpected_end()),
        Some(token) => match parser.get_nud_lookup().get(&token.kind) {
            Some(nud_fn) => *nud_fn,
            None => return Err(parser.unexpected_token(token)),
        },
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than the current level, keep extending lhs
    while let Some(token_kind) = parser.current_token_kind() {
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expr::Literal(LiteralExpr {
                value: Value::Int(value),
                line: token.line,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                parser.get_position(token.line),
            )),
        },
        TokenKind::Decimal => match token.value.parse::<f64>() {
            Ok(value) => Ok(Expr::Literal(LiteralExpr {
                value: Value::Float(value),
                line: token.line,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                parser.get_position(token.line),
            )),
        },
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr {
            value: token.value,
            line: token.line,
        })),
        _ => Err(parser.unexpected_token(&token)),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;

    let operator = match operator_token.kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Dash => BinaryOperator::Subtract,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        _ => return Err(parser.unexpected_token(&operator_token)),
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        line: operator_token.line,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: PrefixOperator::Negate,
        right_expr: Box::new(rhs),
        line: operator_token.line,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
