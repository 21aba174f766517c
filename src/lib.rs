//! Major triad voicings for six-string guitar.
//!
//! For a key, the engine enumerates every three-string voicing of the major
//! triad on the four adjacent string groups, then picks four positions per
//! group that walk up the neck.

pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod selection;
pub mod text;
pub mod triad;
pub mod types;
pub mod voicing;

pub use api::{generate_triads_data, generate_triads_data_with, TriadEngine};
pub use chain::{find_voicing_chains, shares_notes, Chain};
pub use config::EngineConfig;
pub use error::*;
pub use fretboard::{
    build_fretboard, note_name_to_pitch_class, pitch_class_name, Fretboard, PitchClass, MAX_FRET,
    NOTE_NAMES_SHARP, STANDARD_TUNING_MIDI, STRING_NAMES,
};
pub use selection::{
    select_positions, select_positions_coordinated, select_positions_independent,
    PositionedVoicing, SelectionMode,
};
pub use text::to_text;
pub use triad::{build_major_triad, classify_inversion, Inversion, Triad};
pub use types::{StringGroupResult, TriadsResult};
pub use voicing::{find_all_voicings, StringGroup, Voicing, DEFAULT_MAX_STRETCH, STRING_GROUPS};
