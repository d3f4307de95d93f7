//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Tokens are pulled from the lexer one at a time; the parser only ever holds
//! a single token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token source, consumed lazily
    lexer: Lexer,
    /// One token of lookahead; `None` once the input is exhausted
    current: Option<Token>,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over the given source text and primes the lookahead.
    pub fn new(source: String, file: Option<String>) -> Self {
        let mut lexer = Lexer::new(source, file);
        let current = lexer.next();
        let file = lexer.file();

        Parser {
            lexer,
            current,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|token| token.kind)
    }

    /// Consumes the current token and pulls the next one from the lexer.
    pub fn advance(&mut self) -> Result<Token, Error> {
        match self.current.take() {
            Some(token) => {
                self.current = self.lexer.next();
                Ok(token)
            }
            None => Err(self.unexpected_end()),
        }
    }

    /// Expects a token of the specified kind and consumes it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if let Some(token) = self.current.as_ref().filter(|token| token.kind != expected_kind) {
            return Err(self.unexpected_token(token));
        }

        self.advance()
    }

    /// Builds the error for a token the grammar does not allow here.
    ///
    /// A token that could start a statement is blamed on the previous line as a
    /// missing `;`; anything else is reported on its own line.
    pub fn unexpected_token(&self, token: &Token) -> Error {
        if token.kind.starts_statement() {
            Error::new(
                ErrorImpl::MissingSemicolon,
                Position(token.line.saturating_sub(1), Rc::clone(&self.file)),
            )
        } else {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    kind: token.kind.grammar_name().to_string(),
                    token: token.quoted_value(),
                },
                Position(token.line, Rc::clone(&self.file)),
            )
        }
    }

    /// Builds the error for input that ends in the middle of a statement.
    pub fn unexpected_end(&self) -> Error {
        Error::new(
            ErrorImpl::MissingSemicolon,
            Position(self.lexer.line().saturating_sub(1), Rc::clone(&self.file)),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.is_some()
    }

    /// Lexical errors the lexer has collected so far.
    pub fn lexical_errors(&self) -> &[Error] {
        self.lexer.errors()
    }

    pub fn get_position(&self, line: u32) -> Position {
        Position(line, Rc::clone(&self.file))
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until the input is
/// exhausted. Parsing stops at the first syntax error.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the lexical errors collected while parsing)
/// - Result containing either the Program or the first Error
pub fn parse(source: &str, file: Option<String>) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(source.to_string(), file);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(Some(stmt)) => body.push(stmt),
            Ok(None) => {}
            Err(error) => {
                debug!(line = error.line(), %error, "parse failed");
                return (parser, Err(error));
            }
        }
    }

    debug!(statements = body.len(), "parsed program");
    let file = Rc::clone(&parser.file);
    (parser, Ok(Program { body, file }))
}
