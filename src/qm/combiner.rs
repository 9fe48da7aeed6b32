//! Prime-implicant finder: repeatedly combines adjacent cubes until no
//! further merge is possible.

use super::implicant::Implicant;

/// Run the combiner to a fixed point, returning the resulting prime
/// implicants and one trace line per phase.
///
/// Each phase considers every unordered pair of the current generation,
/// merges what it can, carries forward anything left unconsumed, and
/// deduplicates by cube identity (`bits` equality — see
/// [`Implicant`]'s `PartialEq`). The loop stops the first phase that
/// produces no new merges.
pub fn find_prime_implicants(initial: Vec<Implicant>) -> (Vec<Implicant>, Vec<String>) {
    let mut current = initial;
    let mut steps = Vec::new();
    let mut phase = 0usize;

    loop {
        let n = current.len();
        let mut consumed = vec![false; n];
        let mut merged = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(combined) = current[i].combine_with(&current[j]) {
                    consumed[i] = true;
                    consumed[j] = true;
                    merged.push(combined);
                }
            }
        }

        if merged.is_empty() {
            steps.push(format!(
                "phase {phase}: no merges possible, {n} implicant(s) remain"
            ));
            break;
        }

        let mut next: Vec<Implicant> = current
            .iter()
            .enumerate()
            .filter(|(i, _)| !consumed[*i])
            .map(|(_, imp)| imp.clone())
            .collect();
        next.extend(merged);
        dedup_by_bits(&mut next);

        steps.push(format!(
            "phase {phase}: {n} implicant(s) -> {} after merge and dedup",
            next.len()
        ));

        phase += 1;
        current = next;
    }

    (current, steps)
}

/// Deduplicate by cube identity, preserving the first occurrence's
/// `covered` set. A cube produced by more than one pair merge must collapse
/// to a single entry since the cover selector depends on set equality.
fn dedup_by_bits(implicants: &mut Vec<Implicant>) {
    let mut seen: Vec<Implicant> = Vec::with_capacity(implicants.len());
    for imp in implicants.drain(..) {
        match seen.iter().position(|existing| existing == &imp) {
            Some(pos) => {
                debug_assert_eq!(
                    seen[pos].covered, imp.covered,
                    "duplicate cube with mismatched covered sets"
                );
            }
            None => seen.push(imp),
        }
    }
    *implicants = seen;
}

#[cfg(test)]
mod tests {
    use super::super::implicant::BitState;
    use super::*;

    fn singleton(bits: &str, minterm: u64) -> Implicant {
        let bits = bits
            .chars()
            .map(|c| if c == '0' { BitState::Zero } else { BitState::One })
            .collect();
        Implicant::new(bits, vec![minterm])
    }

    #[test]
    fn combines_full_adjacency_cube_to_all_dash() {
        // f(a,b) = 1 for every minterm of a two-variable function
        let initial = vec![
            singleton("00", 0),
            singleton("01", 1),
            singleton("10", 2),
            singleton("11", 3),
        ];
        let (primes, _) = find_prime_implicants(initial);
        assert_eq!(primes.len(), 1);
        assert!(primes[0].bits.iter().all(|b| matches!(b, BitState::Dash)));
        assert_eq!(primes[0].covered, vec![0, 1, 2, 3]);
    }

    #[test]
    fn disjoint_minterms_stay_separate() {
        let initial = vec![singleton("00", 0), singleton("11", 3)];
        let (primes, _) = find_prime_implicants(initial);
        assert_eq!(primes.len(), 2);
    }

    #[test]
    fn single_minterm_is_its_own_prime_implicant() {
        let initial = vec![singleton("101", 5)];
        let (primes, _) = find_prime_implicants(initial);
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0].covered, vec![5]);
    }

    #[test]
    fn steps_trace_one_line_per_phase() {
        let initial = vec![
            singleton("00", 0),
            singleton("01", 1),
            singleton("10", 2),
            singleton("11", 3),
        ];
        let (_, steps) = find_prime_implicants(initial);
        assert!(!steps.is_empty());
    }
}
