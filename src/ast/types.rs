//! Type model of the language.
//!
//! `BasicType` is used both as the declared type of a variable and as the
//! result type of an evaluated expression. `Value` is a runtime value and
//! always knows its own `BasicType`.

use std::fmt::Display;

/// The three primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Int,
    Float,
    String,
}

impl Display for BasicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasicType::Int => write!(f, "int"),
            BasicType::Float => write!(f, "float"),
            BasicType::String => write!(f, "string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn get_type(&self) -> BasicType {
        match self {
            Value::Int(_) => BasicType::Int,
            Value::Float(_) => BasicType::Float,
            Value::String(_) => BasicType::String,
        }
    }

    /// Numeric value widened to `f64`; `None` for strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::String(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == Some(0.0)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", format_float(*value)),
            Value::String(value) => write!(f, "{}", value),
        }
    }
}

/// Shortest round-trip text for a float.
///
/// Integral values keep a trailing `.0`. Magnitudes below `1e-4` or from `1e16`
/// up switch to exponent notation with a signed, two-digit minimum exponent
/// (`1e+16`, `1e-05`, `1.5e+20`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }

    // Debug already picks the shortest digits and the same notation cut-offs
    let text = format!("{:?}", value);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };

    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}e-{:0>2}", mantissa, digits),
        None => format!("{}e+{:0>2}", mantissa, exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_float, BasicType, Value};

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(14).to_string(), "14");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(3.5).to_string(), "3.5");
        assert_eq!(Value::Float(0.1).to_string(), "0.1");
        assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Value::String(String::from("hi \"there\"")).to_string(), "hi \"there\"");
    }

    #[test]
    fn test_float_exponent_notation() {
        assert_eq!(Value::Float(1e16).to_string(), "1e+16");
        assert_eq!(Value::Float(1.5e20).to_string(), "1.5e+20");
        assert_eq!(Value::Float(0.00001).to_string(), "1e-05");
        assert_eq!(Value::Float(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(Value::Float(1e100).to_string(), "1e+100");
        assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Value::Float(1e15).to_string(), "1000000000000000.0");
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn test_value_types() {
        assert_eq!(Value::Int(1).get_type(), BasicType::Int);
        assert_eq!(Value::Float(1.0).get_type(), BasicType::Float);
        assert_eq!(Value::String(String::new()).get_type(), BasicType::String);
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::Int(0).is_zero());
        assert!(Value::Float(0.0).is_zero());
        assert!(Value::Float(-0.0).is_zero());
        assert!(!Value::Float(0.001).is_zero());
        assert!(!Value::String(String::from("0")).is_zero());
    }
}
