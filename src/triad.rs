//! Major triad construction and inversion classification

use crate::error::Result;
use crate::fretboard::{note_name_to_pitch_class, pitch_class_name, PitchClass};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Root, major third and perfect fifth of a major key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triad {
    pub root: PitchClass,
    pub third: PitchClass,
    pub fifth: PitchClass,
}

impl Triad {
    /// Major triad on a root pitch class (major 3rd = +4, perfect 5th = +7)
    pub fn major(root: PitchClass) -> Self {
        let root = root % 12;
        Self {
            root,
            third: (root + 4) % 12,
            fifth: (root + 7) % 12,
        }
    }

    /// `[root, third, fifth]`
    pub fn pitch_classes(&self) -> [PitchClass; 3] {
        [self.root, self.third, self.fifth]
    }

    pub fn note_names(&self) -> [&'static str; 3] {
        self.pitch_classes().map(pitch_class_name)
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        pc == self.root || pc == self.third || pc == self.fifth
    }

    /// True when `notes` holds each triad member exactly once, in any order
    pub fn is_spelled_by(&self, notes: &[PitchClass; 3]) -> bool {
        let [a, b, c] = *notes;
        a != b && b != c && a != c && notes.iter().all(|&pc| self.contains(pc))
    }
}

/// Build the major triad for a key name such as `"C"`, `"F#"` or `"Bb"`.
///
/// # Example
/// ```
/// use triads::build_major_triad;
///
/// let g = build_major_triad("G").unwrap();
/// assert_eq!(g.pitch_classes(), [7, 11, 2]);
/// assert_eq!(g.note_names(), ["G", "B", "D"]);
/// ```
///
/// # Errors
/// Returns [`TriadError::InvalidNoteName`](crate::TriadError::InvalidNoteName)
/// for names that don't resolve to a pitch class.
pub fn build_major_triad(root_name: &str) -> Result<Triad> {
    Ok(Triad::major(note_name_to_pitch_class(root_name)?))
}

/// Which triad member sits on the lowest string of a voicing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Inversion {
    /// Root in the bass
    Root,
    /// Third in the bass
    First,
    /// Fifth in the bass
    Second,
    /// Bass note is not a triad member. Unreachable for enumerated voicings.
    Unknown,
}

impl Inversion {
    /// The three real inversions, in bucket order
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    pub fn as_str(&self) -> &'static str {
        match self {
            Inversion::Root => "root",
            Inversion::First => "first",
            Inversion::Second => "second",
            Inversion::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Inversion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(Inversion::Root),
            "first" => Ok(Inversion::First),
            "second" => Ok(Inversion::Second),
            "unknown" => Ok(Inversion::Unknown),
            other => Err(format!("unknown inversion '{}'", other)),
        }
    }
}

/// Label a voicing by its lowest-string note (`notes[0]`).
///
/// Only `notes[0]` is inspected, so any reordering of the upper two notes
/// keeps the label.
pub fn classify_inversion(notes: &[PitchClass; 3], triad: &Triad) -> Inversion {
    let bass = notes[0];
    if bass == triad.root {
        Inversion::Root
    } else if bass == triad.third {
        Inversion::First
    } else if bass == triad.fifth {
        Inversion::Second
    } else {
        Inversion::Unknown
    }
}
