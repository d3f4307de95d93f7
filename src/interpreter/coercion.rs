//! Narrowing rules applied when a value is stored into a typed variable.
//!
//! The same rules hold for declarations and assignments:
//!
//! - `int` accepts only `int` values
//! - `float` accepts `int` and `float`, widening integers
//! - `string` accepts anything verbatim

use crate::{
    ast::types::{BasicType, Value},
    errors::errors::{Error, ErrorImpl},
    Position,
};

pub fn coerce(
    target: BasicType,
    value: Value,
    variable: &str,
    position: &Position,
) -> Result<Value, Error> {
    match (target, value) {
        (BasicType::Int, Value::Int(value)) => Ok(Value::Int(value)),
        (BasicType::Int, Value::Float(_)) => Err(Error::new(
            ErrorImpl::FloatToIntAssignment {
                variable: variable.to_string(),
            },
            position.clone(),
        )),
        (BasicType::Float, Value::Int(value)) => Ok(Value::Float(value as f64)),
        (BasicType::Float, Value::Float(value)) => Ok(Value::Float(value)),
        (BasicType::Int | BasicType::Float, Value::String(_)) => Err(Error::new(
            ErrorImpl::NonNumericAssignment {
                target: target.to_string(),
                variable: variable.to_string(),
            },
            position.clone(),
        )),
        (BasicType::String, value) => Ok(value),
    }
}
