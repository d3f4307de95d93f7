//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream into a
//! `Program`. It uses a Pratt parser for expressions with binding powers for
//! precedence, and one handler per statement-starting token.
//!
//! Parsing stops at the first syntax error; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
