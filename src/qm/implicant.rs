//! Implicant representation and the pairwise combination rule that drives
//! prime-implicant discovery.

/// The state of one bit position in an implicant's cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitState {
    Zero,
    One,
    Dash,
}

/// A cube covering one or more minterms, tracked alongside the set of
/// original minterm indices it covers.
///
/// Two implicants are considered the same cube when their `bits` match;
/// `covered` is carried along but deliberately excluded from equality so
/// that combiner-phase deduplication works by cube identity alone.
#[derive(Debug, Clone)]
pub struct Implicant {
    pub bits: Vec<BitState>,
    pub covered: Vec<u64>,
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}
impl Eq for Implicant {}

impl Implicant {
    pub fn new(bits: Vec<BitState>, covered: Vec<u64>) -> Self {
        Implicant { bits, covered }
    }

    /// Number of literals in this cube's product term: positions that are
    /// not `Dash`. Used by Petrick's tie-break.
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|b| !matches!(b, BitState::Dash)).count()
    }

    /// Attempt to combine two implicants.
    ///
    /// `diff` counts positions where both bits are definite and differ;
    /// `a_dash_only`/`b_dash_only` count positions where one side is `Dash`
    /// and the other is definite. Exactly one of four outcomes is possible:
    /// one side subsumes the other (pure dash superset, no definite clash),
    /// they are adjacent along a single axis (one diff, no dash mismatch),
    /// or no combination exists.
    pub fn combine_with(&self, other: &Implicant) -> Option<Implicant> {
        debug_assert_eq!(self.bits.len(), other.bits.len());

        let mut diff = 0usize;
        let mut a_dash_only = 0usize;
        let mut b_dash_only = 0usize;
        let mut diff_index = None;

        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            match (a, b) {
                (BitState::Dash, BitState::Dash) => {}
                (BitState::Dash, _) => a_dash_only += 1,
                (_, BitState::Dash) => b_dash_only += 1,
                _ if a == b => {}
                _ => {
                    diff += 1;
                    diff_index = Some(i);
                }
            }
        }

        let mut covered = self.covered.clone();
        covered.extend(other.covered.iter().copied());
        covered.sort_unstable();
        covered.dedup();

        if diff == 0 && a_dash_only > 0 && b_dash_only == 0 {
            return Some(Implicant::new(self.bits.clone(), covered));
        }
        if diff == 0 && b_dash_only > 0 && a_dash_only == 0 {
            return Some(Implicant::new(other.bits.clone(), covered));
        }
        if diff == 1 && a_dash_only == 0 && b_dash_only == 0 {
            let mut bits = self.bits.clone();
            bits[diff_index.expect("diff == 1 implies an index was recorded")] = BitState::Dash;
            return Some(Implicant::new(bits, covered));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(spec: &str, covered: Vec<u64>) -> Implicant {
        let bits = spec
            .chars()
            .map(|c| match c {
                '0' => BitState::Zero,
                '1' => BitState::One,
                '-' => BitState::Dash,
                _ => panic!("bad bit spec"),
            })
            .collect();
        Implicant::new(bits, covered)
    }

    #[test]
    fn adjacent_singletons_combine() {
        let a = cube("00", vec![0]);
        let b = cube("01", vec![1]);
        let merged = a.combine_with(&b).unwrap();
        assert_eq!(merged.bits, cube("0-", vec![]).bits);
        assert_eq!(merged.covered, vec![0, 1]);
    }

    #[test]
    fn non_adjacent_singletons_do_not_combine() {
        let a = cube("00", vec![0]);
        let b = cube("11", vec![3]);
        assert!(a.combine_with(&b).is_none());
    }

    #[test]
    fn dash_superset_subsumes() {
        let wide = cube("0-", vec![0, 1]);
        let narrow = cube("00", vec![0]);
        let merged = wide.combine_with(&narrow).unwrap();
        assert_eq!(merged.bits, wide.bits);
        assert_eq!(merged.covered, vec![0, 1]);
    }

    #[test]
    fn mismatched_dash_patterns_do_not_combine() {
        let a = cube("0-0", vec![0, 2]);
        let b = cube("-00", vec![0, 4]);
        assert!(a.combine_with(&b).is_none());
    }

    #[test]
    fn literal_count_excludes_dashes() {
        assert_eq!(cube("1-0", vec![]).literal_count(), 2);
        assert_eq!(cube("---", vec![]).literal_count(), 0);
    }

    #[test]
    fn equality_ignores_covered_set() {
        let a = cube("1-0", vec![4, 5]);
        let b = cube("1-0", vec![99]);
        assert_eq!(a, b);
    }
}
