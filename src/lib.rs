#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc, time::Instant};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::interpreter::Interpreter,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source location: the 1-based line and the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Runs a whole program: lex, parse and execute against a fresh execution context.
///
/// Returns the lexical errors accumulated along the way (reported as warnings by
/// the driver) and the outcome of the run. At most one error is ever returned.
pub fn run_source<W: Write>(
    source: &str,
    file: Option<String>,
    out: &mut W,
) -> (Vec<Error>, Result<(), Error>) {
    let parse_start = Instant::now();
    let (parser, program) = parse(source, file);
    let lexical_errors = parser.lexical_errors().to_vec();
    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    let program = match program {
        Ok(program) => program,
        Err(error) => return (lexical_errors, Err(error)),
    };

    let run_start = Instant::now();
    let mut interpreter = Interpreter::new(out);
    let result = interpreter.run(&program);
    debug!(elapsed = ?run_start.elapsed(), "executed");

    (lexical_errors, result)
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders an error together with its name, tip and the offending source line.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        error in line 2: division by zero
        DivisionByZero
        -> main.tc
           |
         2 | print(1 / 0);
    */

    let mut rendered = format!("{}\n", error);

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("{}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("{} ({})\n", error.get_error_name(), error.get_tip()));
    }
    rendered.push_str(&format!("-> {}\n", error.get_position().1));

    if let Some(line_text) = get_source_line(source, error.line()) {
        let line_string = error.line().to_string();
        let padding = line_string.len() + 2;

        rendered.push_str(&format!("{:>padding$}\n", "|"));
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }

    rendered
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_source_line() {
        let source = "int a = 1;\r\nprint(a);\n\nprint(2);";
        assert_eq!(super::get_source_line(source, 1), Some("int a = 1;"));
        assert_eq!(super::get_source_line(source, 2), Some("print(a);"));
        assert_eq!(super::get_source_line(source, 3), Some(""));
        assert_eq!(super::get_source_line(source, 4), Some("print(2);"));
        assert_eq!(super::get_source_line(source, 5), None);
        assert_eq!(super::get_source_line(source, 0), None);
    }

    #[test]
    fn test_display_error_includes_source_line() {
        let source = "int a = 1;\nprint(a / 0);\n";
        let error = Error::new(
            ErrorImpl::DivisionByZero,
            Position(2, Rc::new(String::from("main.tc"))),
        );

        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "error in line 2: division by zero");
        assert_eq!(lines[1], "DivisionByZero");
        assert_eq!(lines[2], "-> main.tc");
        assert_eq!(lines[3], "  |");
        assert_eq!(lines[4], "2 | print(a / 0);");
    }

    #[test]
    fn test_display_error_without_source_line() {
        let error = Error::new(ErrorImpl::MissingSemicolon, Position(0, Rc::new(String::from("shell"))));
        let rendered = super::display_error(&error, "int a = 1");

        assert!(rendered.starts_with("error in line 0: syntax error (missing ';')\n"));
        assert!(rendered.contains("MissingSemicolon ("));
        assert!(!rendered.contains('|'));
    }
}
