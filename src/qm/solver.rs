//! End-to-end orchestration of the minimization pipeline: lex, parse,
//! enumerate minterms, find prime implicants, select a cover, format.

use super::combiner::find_prime_implicants;
use super::cover::select_cover;
use super::formatter::format_cover;
use super::lexer::tokenize;
use super::minterm::find_minterms;
use super::parser::parse;
use crate::error::ParseError;

/// The result of minimizing one expression: the rendered sum-of-products
/// string plus the stage-by-stage trace collected along the way.
#[derive(Debug, Clone)]
pub struct QmResult {
    pub expression: String,
    pub variables: Vec<String>,
    pub steps: Vec<String>,
}

/// Run the full pipeline over `input`, returning the minimized expression
/// and a trace of every stage, or a [`ParseError`] if the input is
/// lexically or structurally invalid.
///
/// Tracing is always collected, even when the caller discards it — the
/// cost is negligible at the variable counts this crate targets, and
/// collecting unconditionally keeps one code path for both the quiet and
/// `--show-steps` CLI modes.
pub fn minimize(input: &str) -> Result<QmResult, ParseError> {
    let mut steps = Vec::new();

    let tokens = tokenize(input)?;
    steps.push(format!("lexed {} token(s)", tokens.len()));

    let parsed = parse(tokens)?;
    steps.push(format!(
        "parsed with {} variable(s): {}",
        parsed.variables.len(),
        parsed.variables.join(", ")
    ));
    steps.push(format!(
        "converted to RPN: {} token(s)",
        parsed.rpn.len()
    ));

    let (minterms, seed_implicants) = find_minterms(&parsed.rpn, &parsed.variables);
    steps.push(format!(
        "enumerated {} minterm(s) out of {} assignment(s)",
        minterms.len(),
        1u64 << parsed.variables.len()
    ));

    if minterms.is_empty() {
        steps.push("no satisfying assignment: expression is unsatisfiable".to_string());
        return Ok(QmResult {
            expression: "0".to_string(),
            variables: parsed.variables,
            steps,
        });
    }

    let (primes, combine_steps) = find_prime_implicants(seed_implicants);
    steps.extend(combine_steps);
    steps.push(format!("found {} prime implicant(s)", primes.len()));

    let minterm_indices: Vec<u64> = minterms.iter().map(|m| m.decimal).collect();
    let (cover, cover_steps) = select_cover(&minterm_indices, &primes);
    steps.extend(cover_steps);
    steps.push(format!("selected a cover of {} implicant(s)", cover.len()));

    let expression = format_cover(cover, &parsed.variables);
    steps.push(format!("formatted result: {expression}"));

    Ok(QmResult {
        expression,
        variables: parsed.variables,
        steps,
    })
}
