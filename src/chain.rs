//! # Chain Finder
//!
//! A chain is one voicing per string group, `[v0, v1, v2, v3]`, where each
//! neighboring pair plays the same notes at the same frets on the two strings
//! the groups share. Group `i`'s upper two strings are group `i + 1`'s lower
//! two strings, so the check compares `v_i[1..3]` against `v_{i+1}[0..2]`.
//!
//! ```text
//! strings:  0  1  2  3  4  5
//! group 0: [x  x  x]
//! group 1:    [x  x  x]
//! group 2:       [x  x  x]
//! group 3:          [x  x  x]
//! ```
//!
//! The search is a nested join over the four voicing lists. With 4-6
//! voicings per group it touches at most a few thousand combinations.

use crate::voicing::Voicing;
use tracing::trace;

/// One voicing per string group, low group first
pub type Chain<'a> = [&'a Voicing; 4];

/// True when `upper` continues `lower` across their two shared strings
pub fn shares_notes(lower: &Voicing, upper: &Voicing) -> bool {
    lower.notes[1..3] == upper.notes[0..2] && lower.frets[1..3] == upper.frets[0..2]
}

/// Find every chain across the four string groups' voicing lists.
///
/// Chains are returned in the order the nested search visits them (group 0
/// list order outermost). No deduplication or pruning is applied.
pub fn find_voicing_chains(groups: &[Vec<Voicing>; 4]) -> Vec<Chain<'_>> {
    let mut chains = Vec::new();

    for v0 in &groups[0] {
        for v1 in groups[1].iter().filter(|v1| shares_notes(v0, v1)) {
            for v2 in groups[2].iter().filter(|v2| shares_notes(v1, v2)) {
                for v3 in groups[3].iter().filter(|v3| shares_notes(v2, v3)) {
                    trace!(
                        frets = ?[v0.frets, v1.frets, v2.frets, v3.frets],
                        "found voicing chain"
                    );
                    chains.push([v0, v1, v2, v3]);
                }
            }
        }
    }

    chains
}

/// Mean of the four member voicings' average frets
pub fn chain_avg_fret(chain: &Chain<'_>) -> f64 {
    chain.iter().map(|v| v.avg_fret).sum::<f64>() / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::build_fretboard;
    use crate::triad::{build_major_triad, Inversion};
    use crate::voicing::{find_all_voicings, DEFAULT_MAX_STRETCH, STRING_GROUPS};

    fn group_voicings(key: &str) -> [Vec<Voicing>; 4] {
        let triad = build_major_triad(key).unwrap();
        let fretboard = build_fretboard();
        STRING_GROUPS.map(|g| find_all_voicings(&triad, g, &fretboard, DEFAULT_MAX_STRETCH))
    }

    #[test]
    fn test_shares_notes_requires_same_frets() {
        let triad = build_major_triad("C").unwrap();
        let lower = Voicing::new([2, 3, 4], [2, 0, 1], [4, 7, 0], &triad);
        let upper = Voicing::new([3, 4, 5], [0, 1, 0], [7, 0, 4], &triad);
        assert!(shares_notes(&lower, &upper));

        // Same notes an octave up on the shared strings is a different place on the neck
        let octave_up = Voicing::new([3, 4, 5], [12, 13, 12], [7, 0, 4], &triad);
        assert!(!shares_notes(&lower, &octave_up));
    }

    #[test]
    fn test_c_major_chains() {
        let groups = group_voicings("C");
        let chains = find_voicing_chains(&groups);
        assert_eq!(chains.len(), 4);

        let open = chains
            .iter()
            .find(|c| c[3].frets == [0, 1, 0])
            .expect("open position chain");
        assert_eq!(open[0].frets, [3, 3, 2]);
        assert_eq!(open[1].frets, [3, 2, 0]);
        assert_eq!(open[2].frets, [2, 0, 1]);
        assert_eq!(open[0].inversion, Inversion::Second);
    }

    #[test]
    fn test_every_chain_is_geometrically_consistent() {
        for key in ["C", "D", "E", "F#", "G", "A#", "B"] {
            let groups = group_voicings(key);
            for chain in find_voicing_chains(&groups) {
                for i in 0..3 {
                    assert_eq!(chain[i].notes[1..3], chain[i + 1].notes[0..2]);
                    assert_eq!(chain[i].frets[1..3], chain[i + 1].frets[0..2]);
                }
                for (g, v) in chain.iter().enumerate() {
                    assert_eq!(v.string_group, STRING_GROUPS[g]);
                }
            }
        }
    }

    #[test]
    fn test_g_major_has_too_few_chains_to_coordinate() {
        let groups = group_voicings("G");
        assert_eq!(find_voicing_chains(&groups).len(), 3);
    }

    #[test]
    fn test_empty_group_yields_no_chains() {
        let mut groups = group_voicings("C");
        groups[2].clear();
        assert!(find_voicing_chains(&groups).is_empty());
    }

    #[test]
    fn test_chain_avg_fret() {
        let groups = group_voicings("C");
        let chains = find_voicing_chains(&groups);
        let open = chains.iter().find(|c| c[3].frets == [0, 1, 0]).unwrap();
        // (8/3 + 5/3 + 3/3 + 1/3) / 4
        assert!((chain_avg_fret(open) - 17.0 / 12.0).abs() < 1e-9);
    }
}
