use std::io::Write;

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
};

use super::{coercion::coerce, expr::eval_expression, interpreter::Interpreter};

pub fn exec_statement<W: Write>(
    interpreter: &mut Interpreter<W>,
    statement: &Stmt,
) -> Result<(), Error> {
    match statement {
        Stmt::VarDecl(var_decl) => {
            let position = interpreter.get_position(var_decl.line);
            let value = eval_expression(interpreter, &var_decl.assigned_value)?;
            let value = coerce(var_decl.explicit_type, value, &var_decl.identifier, &position)?;

            interpreter.environment_mut().declare(
                &var_decl.identifier,
                var_decl.explicit_type,
                value,
                position,
            )
        }
        Stmt::Assignment(assignment) => {
            let position = interpreter.get_position(assignment.line);
            let value = eval_expression(interpreter, &assignment.value)?;

            interpreter
                .environment_mut()
                .assign(&assignment.assignee, value, position)
        }
        Stmt::Print(print) => {
            let value = eval_expression(interpreter, &print.expression)?;

            writeln!(interpreter.out(), "{}", value).map_err(|error| {
                Error::new(
                    ErrorImpl::OutputError {
                        message: error.to_string(),
                    },
                    interpreter.get_position(print.line),
                )
            })
        }
    }
}
