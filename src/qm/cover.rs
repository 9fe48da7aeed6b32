//! Prime-implicant chart: essential-prime elimination followed by Petrick's
//! method when a residual gap remains.

use super::combiner::find_prime_implicants;
use super::implicant::Implicant;
use super::minterm::find_minterms;
use super::token::{Operator, Token};

/// Select a minimum cover of `minterms` from `primes`.
///
/// First eliminates essential primes to a fixed point. If that alone does
/// not cover every minterm, the residual covering problem is solved by
/// Petrick's method (`petricks_method`), which formulates the problem as a
/// Boolean expression over one variable per residual prime and reuses the
/// combiner to find its own minimal solution.
pub fn select_cover(minterms: &[u64], primes: &[Implicant]) -> (Vec<Implicant>, Vec<String>) {
    let mut steps = Vec::new();
    let mut used_minterms: Vec<u64> = Vec::new();
    let mut used_primes: Vec<usize> = Vec::new();

    loop {
        let mut found_one = false;
        for &m in minterms {
            if used_minterms.contains(&m) {
                continue;
            }
            let covering: Vec<usize> = primes
                .iter()
                .enumerate()
                .filter(|(i, p)| !used_primes.contains(i) && p.covered.contains(&m))
                .map(|(i, _)| i)
                .collect();
            if covering.len() == 1 {
                let idx = covering[0];
                used_primes.push(idx);
                for &c in &primes[idx].covered {
                    if !used_minterms.contains(&c) {
                        used_minterms.push(c);
                    }
                }
                found_one = true;
                steps.push(format!(
                    "essential prime {idx} selected (sole cover of minterm {m})"
                ));
            }
        }
        if !found_one {
            break;
        }
    }

    if used_minterms.len() == minterms.len() {
        let chosen: Vec<Implicant> = used_primes.iter().map(|&i| primes[i].clone()).collect();
        return (chosen, steps);
    }

    steps.push("residual minterms remain after essential-prime elimination, invoking Petrick's method".to_string());
    let residual_primes = petricks_method(minterms, primes, &used_minterms, &used_primes);
    let mut chosen: Vec<Implicant> = used_primes.iter().map(|&i| primes[i].clone()).collect();
    chosen.extend(residual_primes);
    (chosen, steps)
}

/// Solve the residual covering problem: build a Boolean expression
/// over one variable per residual prime — a conjunction over residual
/// minterms, each clause a disjunction over the primes that cover it (the
/// standard product-of-sums formulation of a set-cover constraint) — then
/// recurse through the minterm/combiner pipeline to minimize it, and
/// translate its smallest, lowest-literal-count term back into a set of
/// original primes.
fn petricks_method(
    minterms: &[u64],
    primes: &[Implicant],
    used_minterms: &[u64],
    used_primes: &[usize],
) -> Vec<Implicant> {
    let residual_minterms: Vec<u64> = minterms
        .iter()
        .copied()
        .filter(|m| !used_minterms.contains(m))
        .collect();

    let residual_prime_indices: Vec<usize> = (0..primes.len())
        .filter(|i| !used_primes.contains(i))
        .collect();
    let variables: Vec<String> = (0..residual_prime_indices.len())
        .map(|i| format!("v{i}"))
        .collect();

    let mut rpn = Vec::new();
    for &m in &residual_minterms {
        let covering: Vec<usize> = residual_prime_indices
            .iter()
            .enumerate()
            .filter(|(_, &orig)| primes[orig].covered.contains(&m))
            .map(|(pos, _)| pos)
            .collect();
        for &pos in &covering {
            rpn.push(Token::Var(variables[pos].clone()));
        }
        for _ in 1..covering.len() {
            rpn.push(Token::Op(Operator::Or));
        }
    }
    for _ in 1..residual_minterms.len() {
        rpn.push(Token::Op(Operator::And));
    }

    let (_, seed_implicants) = find_minterms(&rpn, &variables);
    let (covering_primes, _) = find_prime_implicants(seed_implicants);

    let shortest_len = covering_primes
        .iter()
        .map(one_bit_count)
        .min()
        .expect("at least one residual minterm implies at least one covering term");

    let shortest_terms: Vec<&Implicant> = covering_primes
        .iter()
        .filter(|imp| one_bit_count(imp) == shortest_len)
        .collect();

    let best = shortest_terms
        .iter()
        .min_by_key(|term| {
            one_bit_positions(term)
                .iter()
                .map(|&pos| primes[residual_prime_indices[pos]].literal_count())
                .sum::<usize>()
        })
        .expect("shortest_terms is non-empty by construction");

    one_bit_positions(best)
        .iter()
        .map(|&pos| primes[residual_prime_indices[pos]].clone())
        .collect()
}

fn one_bit_count(imp: &Implicant) -> usize {
    imp.bits
        .iter()
        .filter(|b| matches!(b, super::implicant::BitState::One))
        .count()
}

fn one_bit_positions(imp: &Implicant) -> Vec<usize> {
    imp.bits
        .iter()
        .enumerate()
        .filter(|(_, b)| matches!(b, super::implicant::BitState::One))
        .map(|(i, _)| i)
        .collect()
}
