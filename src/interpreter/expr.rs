use std::io::Write;

use crate::{
    ast::{
        expressions::{BinaryExpr, BinaryOperator, Expr, PrefixExpr, PrefixOperator},
        types::Value,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::interpreter::Interpreter;

/// Evaluates an expression to a value. Operands are evaluated left to right.
pub fn eval_expression<W: Write>(
    interpreter: &Interpreter<W>,
    expression: &Expr,
) -> Result<Value, Error> {
    match expression {
        Expr::Literal(literal) => Ok(literal.value.clone()),
        Expr::Symbol(symbol) => Ok(interpreter
            .environment()
            .lookup(&symbol.value, interpreter.get_position(symbol.line))?
            .value
            .clone()),
        Expr::Binary(binary) => eval_binary(interpreter, binary),
        Expr::Prefix(prefix) => eval_prefix(interpreter, prefix),
    }
}

fn eval_binary<W: Write>(interpreter: &Interpreter<W>, binary: &BinaryExpr) -> Result<Value, Error> {
    let left = eval_expression(interpreter, &binary.left)?;
    let right = eval_expression(interpreter, &binary.right)?;
    let position = interpreter.get_position(binary.line);

    let (Some(lhs), Some(rhs)) = (left.as_f64(), right.as_f64()) else {
        return Err(Error::new(
            ErrorImpl::NonNumericBinaryOperand {
                operator: binary.operator.to_string(),
            },
            position,
        ));
    };

    match (binary.operator, left, right) {
        (BinaryOperator::Divide, _, right) => {
            if right.is_zero() {
                return Err(Error::new(ErrorImpl::DivisionByZero, position));
            }
            Ok(Value::Float(lhs / rhs))
        }
        (operator, Value::Int(lhs), Value::Int(rhs)) => checked_int_arithmetic(operator, lhs, rhs)
            .map(Value::Int)
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::IntegerOverflow {
                        operator: operator.to_string(),
                    },
                    position,
                )
            }),
        (operator, _, _) => Ok(Value::Float(float_arithmetic(operator, lhs, rhs))),
    }
}

// Division never takes the integer path.
fn checked_int_arithmetic(operator: BinaryOperator, lhs: i64, rhs: i64) -> Option<i64> {
    match operator {
        BinaryOperator::Add => lhs.checked_add(rhs),
        BinaryOperator::Subtract => lhs.checked_sub(rhs),
        BinaryOperator::Multiply => lhs.checked_mul(rhs),
        BinaryOperator::Divide => None,
    }
}

fn float_arithmetic(operator: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    match operator {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Subtract => lhs - rhs,
        BinaryOperator::Multiply => lhs * rhs,
        BinaryOperator::Divide => lhs / rhs,
    }
}

fn eval_prefix<W: Write>(interpreter: &Interpreter<W>, prefix: &PrefixExpr) -> Result<Value, Error> {
    let operand = eval_expression(interpreter, &prefix.right_expr)?;
    let position = interpreter.get_position(prefix.line);

    match (prefix.operator, operand) {
        (PrefixOperator::Negate, Value::Int(value)) => {
            value.checked_neg().map(Value::Int).ok_or_else(|| {
                Error::new(
                    ErrorImpl::IntegerOverflow {
                        operator: prefix.operator.to_string(),
                    },
                    position,
                )
            })
        }
        (PrefixOperator::Negate, Value::Float(value)) => Ok(Value::Float(-value)),
        (PrefixOperator::Negate, Value::String(_)) => Err(Error::new(
            ErrorImpl::NonNumericUnaryOperand {
                operator: prefix.operator.to_string(),
            },
            position,
        )),
    }
}
