//! Command-line driver for the Boolean expression minimizer.
//!
//! Two invocation modes: minimize a single expression given as a positional
//! argument, or read expressions line-by-line from standard input when none
//! is given. Both share the same `run_one` entry point into the library.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use boolmin::qm::solver::QmResult;
use boolmin::ParseError;

/// Minimize a Boolean expression to sum-of-products form.
#[derive(Parser, Debug)]
#[command(name = "boolmin", version, about)]
struct Cli {
    /// Expression to minimize. If omitted, read expressions from stdin.
    expression: Option<String>,

    /// Print the stage-by-stage solution trace after the result.
    #[arg(long)]
    show_steps: bool,

    /// Read the expression from a file instead of the positional argument.
    #[arg(long, value_name = "PATH")]
    input_file: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.input_file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display()))?;
        run_one(contents.trim(), cli.show_steps)?;
        return Ok(());
    }

    match &cli.expression {
        Some(expr) => run_one(expr, cli.show_steps)?,
        None => repl(cli.show_steps)?,
    }

    Ok(())
}

/// Minimize one expression and print its SOP form (or the fixed error line),
/// followed by the solution trace when `show_steps` is set.
fn run_one(expr: &str, show_steps: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match boolmin::minimize(expr) {
        Ok(result) => {
            writeln!(out, "{}", result.expression)?;
            if show_steps {
                print_steps(&mut out, &result)?;
            }
        }
        Err(err) => {
            debug_assert!(matches!(
                err,
                ParseError::UnrecognizedCharacter { .. }
                    | ParseError::UnexpectedToken { .. }
                    | ParseError::UnbalancedParentheses
                    | ParseError::TrailingOperator
                    | ParseError::EmptyExpression
            ));
            writeln!(out, "Error: Invalid input")?;
        }
    }

    Ok(())
}

fn print_steps(out: &mut impl Write, result: &QmResult) -> Result<()> {
    for step in &result.steps {
        writeln!(out, "  {step}")?;
    }
    Ok(())
}

/// Read lines from stdin, prompting `Expr: `, minimizing each until EOF.
fn repl(show_steps: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    loop {
        write!(out, "Expr: ")?;
        out.flush()?;

        let mut line = String::new();
        let bytes_read = stdin.lock().read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim();
        run_one(trimmed, show_steps)?;
    }

    Ok(())
}
