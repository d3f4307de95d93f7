use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tinyc::{
    display_error,
    errors::errors::Error,
    interpreter::interpreter::Interpreter,
    lexer::lexer::tokenize,
    parser::parser::parse,
    run_source,
};
use tracing::{debug, info, Level};

/// Interpreter for a tiny statically-typed language with int, float and
/// string values.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to run; starts an interactive session when omitted
    file: Option<PathBuf>,

    /// Print the token stream and stop
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program and stop
    #[arg(long)]
    ast: bool,

    /// Show the error name, a tip and the offending source line on failure
    #[arg(long)]
    explain: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match &args.file {
        Some(path) => run_file(path, &args),
        None => repl(&args),
    }
}

fn run_file(path: &PathBuf, args: &Args) -> Result<ExitCode> {
    let start = Instant::now();

    let source = read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    info!(file = %file_name, bytes = source.len(), "loaded source");

    if args.tokens {
        let (tokens, errors) = tokenize(source, Some(file_name));
        for token in &tokens {
            println!("{}", token);
        }
        println!("Total number of tokens: {}", tokens.len());
        report_warnings(&errors);
        return Ok(ExitCode::SUCCESS);
    }

    if args.ast {
        let (parser, program) = parse(&source, Some(file_name));
        report_warnings(parser.lexical_errors());
        return match program {
            Ok(program) => {
                println!("{}", pretty_print(format!("{:?}", program.body)));
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                report_error(&error, &source, args.explain);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (warnings, result) = run_source(&source, Some(file_name), &mut out);
    out.flush().context("failed to flush standard output")?;

    report_warnings(&warnings);
    debug!(elapsed = ?start.elapsed(), "total");

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            report_error(&error, &source, args.explain);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn repl(args: &Args) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut interpreter = Interpreter::new(io::stdout());
    let mut line = String::new();

    loop {
        print!(">> ");
        io::stdout().flush().context("failed to flush standard output")?;

        line.clear();
        if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
            println!();
            break;
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("exit") {
            break;
        }

        let (parser, program) = parse(command, None);
        report_warnings(parser.lexical_errors());

        let result = program.and_then(|program| {
            if args.ast {
                println!("{}", pretty_print(format!("{:?}", program.body)));
            }
            interpreter.run(&program)
        });

        if let Err(error) = result {
            report_error(&error, command, args.explain);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn report_warnings(errors: &[Error]) {
    for error in errors {
        eprintln!("warning: {} at line {}", error.get_impl(), error.line());
    }
}

fn report_error(error: &Error, source: &str, explain: bool) {
    if explain {
        eprint!("{}", display_error(error, source));
    } else {
        eprintln!("{}", error);
    }
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}
