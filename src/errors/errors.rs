use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Coarse error categories reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    DuplicateDeclaration,
    UndeclaredVariable,
    TypeError,
    DivisionByZero,
    ArithmeticOverflow,
    OutputError,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.0
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorKind::LexicalError,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::MissingSemicolon
            | ErrorImpl::NumberParseError { .. } => ErrorKind::SyntaxError,
            ErrorImpl::VariableAlreadyDeclared { .. } => ErrorKind::DuplicateDeclaration,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::UndeclaredVariable,
            ErrorImpl::FloatToIntAssignment { .. }
            | ErrorImpl::NonNumericAssignment { .. }
            | ErrorImpl::NonNumericBinaryOperand { .. }
            | ErrorImpl::NonNumericUnaryOperand { .. } => ErrorKind::TypeError,
            ErrorImpl::DivisionByZero => ErrorKind::DivisionByZero,
            ErrorImpl::IntegerOverflow { .. } => ErrorKind::ArithmeticOverflow,
            ErrorImpl::OutputError { .. } => ErrorKind::OutputError,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingSemicolon => "MissingSemicolon",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FloatToIntAssignment { .. } => "FloatToIntAssignment",
            ErrorImpl::NonNumericAssignment { .. } => "NonNumericAssignment",
            ErrorImpl::NonNumericBinaryOperand { .. } => "NonNumericBinaryOperand",
            ErrorImpl::NonNumericUnaryOperand { .. } => "NonNumericUnaryOperand",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::OutputError { .. } => "OutputError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::MissingSemicolon => ErrorTip::Suggestion(String::from(
                "the statement ending on this line needs a trailing `;`",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "assign with `{} = ...;` instead of declaring it again",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "declare it first, e.g. `int {} = 0;`",
                variable
            )),
            ErrorImpl::FloatToIntAssignment { variable } => ErrorTip::Suggestion(format!(
                "declare `{}` as `float` to hold fractional values",
                variable
            )),
            ErrorImpl::NonNumericAssignment { .. }
            | ErrorImpl::NonNumericBinaryOperand { .. }
            | ErrorImpl::NonNumericUnaryOperand { .. } => ErrorTip::Suggestion(String::from(
                "only `int` and `float` values take part in arithmetic",
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::IntegerOverflow { .. } => ErrorTip::Suggestion(String::from(
                "integers are 64-bit; use `float` for larger magnitudes",
            )),
            ErrorImpl::OutputError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error in line {}: {}", self.position.0, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    /// `token` is already rendered: numbers bare, text quoted.
    #[error("syntax error at token '{kind}' with value {token}")]
    UnexpectedToken { kind: String, token: String },
    #[error("syntax error (missing ';')")]
    MissingSemicolon,
    #[error("invalid number literal '{token}'")]
    NumberParseError { token: String },
    #[error("variable '{variable}' already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable '{variable}' not declared")]
    VariableNotDeclared { variable: String },
    #[error("cannot assign float to int variable '{variable}'")]
    FloatToIntAssignment { variable: String },
    #[error("cannot assign non-numeric value to {target} variable '{variable}'")]
    NonNumericAssignment { target: String, variable: String },
    #[error("binary operator '{operator}' not supported for non-numeric types")]
    NonNumericBinaryOperand { operator: String },
    #[error("unary operator '{operator}' not supported for non-numeric type")]
    NonNumericUnaryOperand { operator: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in operator '{operator}'")]
    IntegerOverflow { operator: String },
    #[error("failed to write output: {message}")]
    OutputError { message: String },
}
