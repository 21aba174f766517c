//! Result type definitions
//!
//! These types are the engine's only output. They serialize to the JSON
//! shape consumed by the web UI and console printer:
//!
//! ```text
//! {
//!   "key": "C",
//!   "triadNotes": ["C", "E", "G"],
//!   "stringGroups": [
//!     {
//!       "strings": [0, 1, 2],
//!       "stringNames": ["E", "A", "D"],
//!       "voicings": [
//!         { "position": 0, "strings": [0, 1, 2], "frets": [3, 3, 2],
//!           "notes": [7, 0, 4], "noteNames": ["G", "C", "E"],
//!           "inversion": "second", "avgFret": 2.6666666666666665 },
//!         ...
//!       ]
//!     },
//!     ...
//!   ]
//! }
//! ```

use crate::error::{Result, TriadError};
use crate::selection::{PositionedVoicing, SelectionMode};
use crate::voicing::StringGroup;
use serde::Serialize;

/// Selected voicings for one string group
///
/// # Fields
/// - `string_group`: the three string indices, low to high
/// - `string_names`: open string names for those strings
/// - `voicings`: up to four voicings ordered by position
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringGroupResult {
    #[serde(rename = "strings")]
    pub string_group: StringGroup,
    pub string_names: [&'static str; 3],
    pub voicings: Vec<PositionedVoicing>,
}

impl StringGroupResult {
    /// The voicing at a given position, if that position was filled
    pub fn position(&self, position: u8) -> Option<&PositionedVoicing> {
        self.voicings.iter().find(|v| v.position == position)
    }
}

/// Voicings for one major key across all four string groups
///
/// `string_groups` always holds the four fixed groups in low-to-high order.
/// `mode` records how positions were chosen and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriadsResult {
    pub key: String,
    #[serde(rename = "triadNotes")]
    pub triad_note_names: [&'static str; 3],
    pub string_groups: Vec<StringGroupResult>,
    #[serde(skip)]
    pub mode: SelectionMode,
}

impl TriadsResult {
    /// Look up a group's result by its string indices
    pub fn group(&self, string_group: StringGroup) -> Option<&StringGroupResult> {
        self.string_groups
            .iter()
            .find(|g| g.string_group == string_group)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TriadError::SerializeError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TriadError::SerializeError(e.to_string()))
    }
}
