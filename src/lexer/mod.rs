//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Comments, whitespace and illegal-character recovery

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
