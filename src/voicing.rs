//! # Voicing Enumeration
//!
//! Brute-force search for every fretting of a triad on three adjacent strings.
//!
//! ## Search
//! Each string of the group is tried at every fret `0..=max_fret`
//! (`19^3 = 6859` combinations per group with the default fretboard). A
//! combination survives when:
//! 1. Every note belongs to the triad (checked per string, to prune early)
//! 2. The three notes are exactly `{root, third, fifth}` (no doubling, no omission)
//! 3. `max(frets) - min(frets) <= max_stretch`
//!
//! Results come back in enumeration order: ascending fret on the lowest
//! string, then the middle string, then the highest. The order is stable
//! across calls.

use crate::fretboard::{pitch_class_name, Fretboard, PitchClass, STRING_NAMES};
use crate::triad::{classify_inversion, Inversion, Triad};
use serde::Serialize;

/// Default largest fret distance inside one voicing
pub const DEFAULT_MAX_STRETCH: u8 = 5;

/// Three adjacent string indices, low to high
pub type StringGroup = [usize; 3];

/// The four overlapping string groups, low strings first. Neighbors share two strings.
pub const STRING_GROUPS: [StringGroup; 4] = [[0, 1, 2], [1, 2, 3], [2, 3, 4], [3, 4, 5]];

/// Open string names for a group, e.g. `["E", "A", "D"]` for `[0, 1, 2]`
pub fn string_names(group: &StringGroup) -> [&'static str; 3] {
    group.map(|string| STRING_NAMES[string])
}

/// One fretting of a triad on one string group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    #[serde(rename = "strings")]
    pub string_group: StringGroup,
    pub frets: [u8; 3],
    pub notes: [PitchClass; 3],
    pub note_names: [&'static str; 3],
    pub inversion: Inversion,
    pub avg_fret: f64,
}

impl Voicing {
    /// Build a voicing from frets and the notes they sound
    pub fn new(
        string_group: StringGroup,
        frets: [u8; 3],
        notes: [PitchClass; 3],
        triad: &Triad,
    ) -> Self {
        let avg_fret = frets.iter().map(|&f| f64::from(f)).sum::<f64>() / 3.0;
        Self {
            string_group,
            frets,
            notes,
            note_names: notes.map(pitch_class_name),
            inversion: classify_inversion(&notes, triad),
            avg_fret,
        }
    }

    /// Distance between the lowest and highest fret
    pub fn stretch(&self) -> u8 {
        stretch(&self.frets)
    }

    /// True when all three strings ring open
    pub fn is_open(&self) -> bool {
        self.frets == [0, 0, 0]
    }
}

fn stretch(frets: &[u8; 3]) -> u8 {
    let max = frets.iter().copied().max().unwrap_or(0);
    let min = frets.iter().copied().min().unwrap_or(0);
    max - min
}

/// Enumerate every valid voicing of `triad` on `string_group`.
///
/// # Example
/// ```
/// use triads::{build_fretboard, build_major_triad, find_all_voicings, DEFAULT_MAX_STRETCH};
///
/// let fretboard = build_fretboard();
/// let c = build_major_triad("C").unwrap();
/// let voicings = find_all_voicings(&c, [3, 4, 5], &fretboard, DEFAULT_MAX_STRETCH);
///
/// // Open C shape on the top three strings: G (open), C (1st fret), E (open)
/// assert!(voicings.iter().any(|v| v.frets == [0, 1, 0]));
/// ```
///
/// # Panics
/// Panics if a string index in `string_group` is not on the fretboard.
pub fn find_all_voicings(
    triad: &Triad,
    string_group: StringGroup,
    fretboard: &Fretboard,
    max_stretch: u8,
) -> Vec<Voicing> {
    let max_fret = fretboard.max_fret();
    let [low, mid, high] = string_group;
    let mut voicings = Vec::new();

    for f0 in 0..=max_fret {
        let n0 = fretboard.pitch_at(low, f0);
        if !triad.contains(n0) {
            continue;
        }
        for f1 in 0..=max_fret {
            let n1 = fretboard.pitch_at(mid, f1);
            if !triad.contains(n1) {
                continue;
            }
            for f2 in 0..=max_fret {
                let n2 = fretboard.pitch_at(high, f2);
                if !triad.contains(n2) {
                    continue;
                }

                let notes = [n0, n1, n2];
                if !triad.is_spelled_by(&notes) {
                    continue;
                }
                let frets = [f0, f1, f2];
                if stretch(&frets) > max_stretch {
                    continue;
                }

                voicings.push(Voicing::new(string_group, frets, notes, triad));
            }
        }
    }

    voicings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::{build_fretboard, NOTE_NAMES_SHARP};
    use crate::triad::build_major_triad;

    fn voicings_for(key: &str, group: StringGroup) -> Vec<Voicing> {
        let triad = build_major_triad(key).unwrap();
        find_all_voicings(&triad, group, &build_fretboard(), DEFAULT_MAX_STRETCH)
    }

    #[test]
    fn test_open_c_voicing_on_top_strings() {
        let voicings = voicings_for("C", [3, 4, 5]);
        let open = voicings
            .iter()
            .find(|v| v.frets == [0, 1, 0])
            .expect("open C shape should be found");
        assert_eq!(open.notes, [7, 0, 4]);
        assert_eq!(open.note_names, ["G", "C", "E"]);
        assert_eq!(open.inversion, Inversion::Second);
        assert!((open.avg_fret - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_open_g_voicing() {
        let voicings = voicings_for("G", [2, 3, 4]);
        let open = voicings.iter().find(|v| v.is_open()).expect("open D-G-B");
        assert_eq!(open.notes, [2, 7, 11]);
        assert_eq!(open.inversion, Inversion::Second);
        assert_eq!(open.avg_fret, 0.0);
    }

    #[test]
    fn test_every_voicing_spells_the_triad_within_stretch() {
        let fretboard = build_fretboard();
        for key in NOTE_NAMES_SHARP {
            let triad = build_major_triad(key).unwrap();
            for group in STRING_GROUPS {
                let voicings = find_all_voicings(&triad, group, &fretboard, DEFAULT_MAX_STRETCH);
                assert!(!voicings.is_empty(), "{} major has no voicings on {:?}", key, group);
                for v in &voicings {
                    assert!(
                        triad.is_spelled_by(&v.notes),
                        "{} major: bad notes {:?}",
                        key,
                        v.notes
                    );
                    assert!(v.stretch() <= DEFAULT_MAX_STRETCH);
                    assert!(v.frets.iter().all(|&f| f <= 18));
                    assert_ne!(v.inversion, Inversion::Unknown);
                    assert_eq!(v.string_group, group);
                    for i in 0..3 {
                        assert_eq!(fretboard.pitch_at(group[i], v.frets[i]), v.notes[i]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_enumeration_order_is_deterministic() {
        let first = voicings_for("E", [1, 2, 3]);
        let second = voicings_for("E", [1, 2, 3]);
        assert_eq!(first, second);

        let frets: Vec<[u8; 3]> = first.iter().map(|v| v.frets).collect();
        let mut sorted = frets.clone();
        sorted.sort();
        assert_eq!(frets, sorted, "voicings should come out in ascending fret order");
    }

    #[test]
    fn test_c_major_voicing_counts() {
        let counts: Vec<usize> = STRING_GROUPS
            .iter()
            .map(|&g| voicings_for("C", g).len())
            .collect();
        assert_eq!(counts, vec![6, 5, 5, 5]);
    }

    #[test]
    fn test_tighter_stretch_prunes_wide_shapes() {
        let triad = build_major_triad("C").unwrap();
        let fretboard = build_fretboard();
        let wide = find_all_voicings(&triad, [0, 1, 2], &fretboard, 5);
        let tight = find_all_voicings(&triad, [0, 1, 2], &fretboard, 2);
        assert!(tight.len() < wide.len());
        assert!(tight.iter().all(|v| v.stretch() <= 2));
        assert!(!tight.iter().any(|v| v.frets == [0, 3, 5]));
    }

    #[test]
    fn test_string_names() {
        assert_eq!(string_names(&[0, 1, 2]), ["E", "A", "D"]);
        assert_eq!(string_names(&[3, 4, 5]), ["G", "B", "E"]);
    }
}
