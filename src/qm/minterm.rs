//! Minterm generator: enumerates satisfying assignments of an RPN expression.

use std::collections::HashMap;

use super::implicant::{BitState, Implicant};
use super::evaluator::evaluate;
use super::token::Token;

/// A single satisfying assignment, identified by its canonical decimal index
/// (`sum(2^i for i where bit i is set)`, `i` indexed by the variable's
/// position in the sorted variable list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Minterm {
    pub bits: u64,
    pub decimal: u64,
}

impl Minterm {
    fn from_bit_vector(values: &[bool]) -> Self {
        let mut bits: u64 = 0;
        for (i, &v) in values.iter().enumerate() {
            if v {
                bits |= 1 << i;
            }
        }
        Minterm { bits, decimal: bits }
    }
}

/// Enumerate all `2^variables.len()` assignments in lexicographic bit-vector
/// order, keep the ones that evaluate true, and return both the sorted
/// minterm list and the corresponding singleton implicants that seed the
/// combiner.
///
/// Lexicographic order here means the first variable toggles fastest, the
/// last toggles slowest — equivalent to counting from `0` to `2^n - 1` and
/// reading bit `i` as the value of `variables[i]`, so `variables[0]` tracks
/// the counter's low bit.
pub fn find_minterms(
    rpn: &[Token],
    variables: &[String],
) -> (Vec<Minterm>, Vec<Implicant>) {
    let n = variables.len();
    let total = 1u64 << n;
    let mut minterms = Vec::new();

    for assignment in 0..total {
        let values: Vec<bool> = (0..n).map(|i| (assignment >> i) & 1 == 1).collect();
        let mut bound: HashMap<&str, bool> = HashMap::with_capacity(n);
        for (name, value) in variables.iter().zip(values.iter()) {
            bound.insert(name.as_str(), *value);
        }
        if evaluate(rpn, &bound) {
            minterms.push(Minterm::from_bit_vector(&values));
        }
    }

    minterms.sort_by_key(|m| m.decimal);

    let implicants = minterms
        .iter()
        .map(|m| {
            let bits: Vec<BitState> = (0..n)
                .map(|i| {
                    if (m.bits >> i) & 1 == 1 {
                        BitState::One
                    } else {
                        BitState::Zero
                    }
                })
                .collect();
            Implicant::new(bits, vec![m.decimal])
        })
        .collect();

    (minterms, implicants)
}
