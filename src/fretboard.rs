//! # Pitch and Fretboard Model
//!
//! Maps `(string, fret)` pairs to pitch classes on a six-string guitar in
//! standard tuning.
//!
//! ## Conventions
//! - Pitch classes are `0..=11` with `0 = C`, ascending by semitone
//! - String index `0` is the low E (6th) string, `5` is the high E (1st) string
//! - Frets run from `0` (open) to the fretboard's `max_fret`, inclusive
//!
//! ## Note Names
//! Output always uses sharp spelling (`C C# D D# E F F# G G# A A# B`). Input
//! accepts sharps and flats, so `"Bb"` and `"A#"` both resolve to pitch class 10.
//!
//! The fretboard never changes once built. Build it once and pass it by
//! reference to every query.

use crate::error::{Result, TriadError};

/// A note identity modulo octave, `0..=11` (0 = C)
pub type PitchClass = u8;

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Highest fret used for voicing search
pub const MAX_FRET: u8 = 18;

/// Standard tuning as MIDI note numbers, low to high: E2 A2 D3 G3 B3 E4
pub const STANDARD_TUNING_MIDI: [u8; STRING_COUNT] = [40, 45, 50, 55, 59, 64];

/// Open string names, low to high
pub const STRING_NAMES: [&str; STRING_COUNT] = ["E", "A", "D", "G", "B", "E"];

/// Conventional string numbers, low to high (index 0 is the 6th string)
pub const STRING_ORDINALS: [&str; STRING_COUNT] = ["6th", "5th", "4th", "3rd", "2nd", "1st"];

/// Sharp-spelled note names indexed by pitch class
pub const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Sharp-spelled name of a pitch class (values above 11 wrap)
pub fn pitch_class_name(pc: PitchClass) -> &'static str {
    NOTE_NAMES_SHARP[(pc % 12) as usize]
}

/// Resolve a note name like `"C"`, `"F#"` or `"Bb"` to its pitch class.
///
/// The letter is case-insensitive; the accidental must be `#` or `b`.
/// Surrounding whitespace is ignored.
///
/// # Example
/// ```
/// use triads::fretboard::note_name_to_pitch_class;
///
/// assert_eq!(note_name_to_pitch_class("C").unwrap(), 0);
/// assert_eq!(note_name_to_pitch_class("F#").unwrap(), 6);
/// assert_eq!(note_name_to_pitch_class("Bb").unwrap(), 10);
/// assert!(note_name_to_pitch_class("H").is_err());
/// ```
pub fn note_name_to_pitch_class(name: &str) -> Result<PitchClass> {
    let invalid = || TriadError::InvalidNoteName(name.to_string());
    let trimmed = name.trim();
    let mut chars = trimmed.chars();

    let base: i8 = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => return Err(invalid()),
    };

    let accidental: i8 = match chars.as_str() {
        "" => 0,
        "#" => 1,
        "b" => -1,
        _ => return Err(invalid()),
    };

    Ok((base + accidental).rem_euclid(12) as PitchClass)
}

/// Immutable `(string, fret) -> pitch class` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    tuning: [u8; STRING_COUNT],
    max_fret: u8,
    pitch_classes: [Vec<PitchClass>; STRING_COUNT],
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}

impl Fretboard {
    /// Build a fretboard from open-string MIDI notes and a highest fret
    pub fn new(tuning: [u8; STRING_COUNT], max_fret: u8) -> Self {
        let pitch_classes = tuning.map(|open| {
            (0..=max_fret)
                .map(|fret| ((u16::from(open) + u16::from(fret)) % 12) as PitchClass)
                .collect()
        });
        Self {
            tuning,
            max_fret,
            pitch_classes,
        }
    }

    /// Standard tuning, frets 0 through [`MAX_FRET`]
    pub fn standard() -> Self {
        Self::new(STANDARD_TUNING_MIDI, MAX_FRET)
    }

    /// Standard tuning with a custom highest fret
    pub fn with_max_fret(max_fret: u8) -> Self {
        Self::new(STANDARD_TUNING_MIDI, max_fret)
    }

    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    pub fn tuning(&self) -> [u8; STRING_COUNT] {
        self.tuning
    }

    /// Pitch class at a fretted position.
    ///
    /// # Panics
    /// Panics if `string >= 6` or `fret > max_fret`. Use [`Fretboard::try_pitch_at`]
    /// for untrusted indices.
    pub fn pitch_at(&self, string: usize, fret: u8) -> PitchClass {
        self.pitch_classes[string][fret as usize]
    }

    /// Bounds-checked variant of [`Fretboard::pitch_at`]
    pub fn try_pitch_at(&self, string: usize, fret: u8) -> Result<PitchClass> {
        let frets = self
            .pitch_classes
            .get(string)
            .ok_or(TriadError::InvalidStringIndex { string })?;
        frets
            .get(fret as usize)
            .copied()
            .ok_or(TriadError::InvalidFretNumber {
                string,
                fret,
                max_fret: self.max_fret,
            })
    }

    /// Absolute MIDI note of a fretted position (for playback consumers)
    pub fn midi_at(&self, string: usize, fret: u8) -> Result<u8> {
        self.try_pitch_at(string, fret)?;
        Ok(self.tuning[string].saturating_add(fret))
    }
}

/// Build the standard-tuning fretboard used for voicing search
pub fn build_fretboard() -> Fretboard {
    Fretboard::standard()
}
