//! Reproducible random minterm/expression generation for property tests.
//!
//! Not part of the public minimization contract — a test-only utility that
//! drives the soundness and idempotence sweeps in `tests/soundness_tests.rs`
//! over many small instances instead of only the fixed scenario list.
//! Carries no don't-care support: don't-cares stay out of scope as a
//! first-class input, so this only ever emits minterm-only functions.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

/// Generate `n_minterms` unique random minterms over `n_variables`
/// variables, seeded for reproducibility. Sorted ascending.
///
/// # Panics
/// Panics if `n_variables` is zero or exceeds 63, or if `n_minterms`
/// exceeds `2^n_variables`.
pub fn generate_random_minterms(n_variables: usize, n_minterms: usize, seed: u64) -> Vec<u64> {
    assert!(n_variables > 0, "number of variables must be positive");
    assert!(n_variables < 63, "number of variables ({n_variables}) exceeds supported range");
    let universe = 1u64 << n_variables;
    assert!(
        n_minterms as u64 <= universe,
        "cannot generate {n_minterms} unique minterms over only {universe} assignments"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut minterms = HashSet::new();
    while minterms.len() < n_minterms {
        minterms.insert(rng.random_range(0..universe));
    }

    let mut result: Vec<u64> = minterms.into_iter().collect();
    result.sort_unstable();
    result
}

/// Variable names `a`, `b`, ..., assigned to bit positions `0..n_variables`.
/// Lexicographic order matches the sort `parser::extract_variables` would
/// produce for these same single-letter names, so an expression built from
/// them round-trips through the normal parsing pipeline unchanged.
pub fn variable_names(n_variables: usize) -> Vec<String> {
    assert!(n_variables <= 26, "only single-letter names a..z are supported");
    (0..n_variables)
        .map(|i| ((b'a' + i as u8) as char).to_string())
        .collect()
}

/// Render a minterm set as a sum-of-products expression string over
/// `variables`, one product per minterm, every variable appearing in
/// definite form. Parsing and evaluating this string reproduces exactly
/// the given minterm set — useful as a known-truth-table input to
/// soundness/idempotence sweeps.
pub fn minterms_to_expression(minterms: &[u64], variables: &[String]) -> String {
    if minterms.is_empty() {
        return "0".to_string();
    }

    minterms
        .iter()
        .map(|&m| {
            let literals: Vec<String> = variables
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    if (m >> i) & 1 == 1 {
                        name.clone()
                    } else {
                        format!("!{name}")
                    }
                })
                .collect();
            format!("({})", literals.join(" & "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Generate a random small expression over `n_variables` variables, seeded
/// for reproducibility, along with the exact minterm set it is true on.
pub fn random_expression(n_variables: usize, n_minterms: usize, seed: u64) -> (String, Vec<u64>) {
    let minterms = generate_random_minterms(n_variables, n_minterms, seed);
    let variables = variable_names(n_variables);
    (minterms_to_expression(&minterms, &variables), minterms)
}
