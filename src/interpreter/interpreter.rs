//! Main interpreter module.
//!
//! This module contains the Interpreter structure, which owns the execution
//! context for a run and the sink that printed values are written to.

use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{ast::statements::Program, errors::errors::Error, Position};

use super::{environment::Environment, stmt::exec_statement};

/// Executes programs against one execution context.
///
/// A fresh Interpreter starts with an empty environment. Running several
/// programs through the same Interpreter shares their variables, which is how
/// an interactive session keeps its state between lines.
pub struct Interpreter<W: Write> {
    /// The variables declared so far
    environment: Environment,
    /// Where `print` writes, one value per line
    out: W,
    /// Source name used for error positions
    file: Rc<String>,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Interpreter {
            environment: Environment::new(),
            out,
            file: Rc::new(String::from("shell")),
        }
    }

    /// Executes the statements in order, stopping at the first error.
    pub fn run(&mut self, program: &Program) -> Result<(), Error> {
        self.file = Rc::clone(&program.file);

        for statement in program.iter() {
            debug!(line = statement.line(), "executing statement");
            exec_statement(self, statement)?;
        }

        Ok(())
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn get_position(&self, line: u32) -> Position {
        Position(line, Rc::clone(&self.file))
    }
}
