//! Tree-walking evaluation of parsed programs.
//!
//! - Execution of statements in source order
//! - Recursive evaluation of expressions
//! - The execution context holding declared variables
//! - Narrowing rules for typed declarations and assignments

pub mod coercion;
pub mod environment;
pub mod expr;
pub mod interpreter;
pub mod stmt;
