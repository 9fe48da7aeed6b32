//! Formatter: renders a chosen cover of implicants as a sum-of-products string.

use super::implicant::{BitState, Implicant};

/// Render `cover` over `variables` as `p1 | p2 | ...`, each product wrapped
/// in parens when it has more than one literal. An empty cover (the
/// function is unsatisfiable) renders as `0`; a cover consisting of a
/// single implicant with every bit DASH (the function is a tautology)
/// renders as `1`.
///
/// Implicants are rendered in order of their smallest covered minterm index
/// so that output is deterministic regardless of discovery order.
pub fn format_cover(mut cover: Vec<Implicant>, variables: &[String]) -> String {
    if cover.is_empty() {
        return "0".to_string();
    }

    cover.sort_by_key(|imp| imp.covered.iter().copied().min().unwrap_or(u64::MAX));

    if cover.len() == 1 && cover[0].bits.iter().all(|b| matches!(b, BitState::Dash)) {
        return "1".to_string();
    }

    cover
        .iter()
        .map(|imp| format_product(imp, variables))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_product(imp: &Implicant, variables: &[String]) -> String {
    let literals: Vec<String> = imp
        .bits
        .iter()
        .zip(variables.iter())
        .filter_map(|(bit, name)| match bit {
            BitState::One => Some(name.clone()),
            BitState::Zero => Some(format!("!{name}")),
            BitState::Dash => None,
        })
        .collect();

    if literals.len() == 1 {
        literals.into_iter().next().unwrap()
    } else {
        format!("({})", literals.join(" & "))
    }
}
