//! # Public API
//!
//! This module contains the main entry points for the triad voicing engine.
//!
//! ## Entry Points
//!
//! - [`generate_triads_data()`] - Voicings for one key with the standard settings (recommended)
//! - [`generate_triads_data_with()`] - Same, with a custom [`EngineConfig`]
//! - [`TriadEngine`] - Holds a prebuilt fretboard for answering many keys
//!
//! ## Pipeline
//! 1. Build the major triad for the key
//! 2. Enumerate voicings on each of the four string groups
//! 3. Find chains across the groups and select four positions per group
//! 4. Assemble the per-group results with string names
//!
//! ## Typical Usage
//!
//! ```rust
//! use triads::generate_triads_data;
//!
//! let result = generate_triads_data("C")?;
//! assert_eq!(result.triad_note_names, ["C", "E", "G"]);
//!
//! let top = result.group([3, 4, 5]).unwrap();
//! assert_eq!(top.string_names, ["G", "B", "E"]);
//! assert_eq!(top.voicings[0].voicing.frets, [0, 1, 0]);
//! # Ok::<(), triads::TriadError>(())
//! ```

use crate::config::EngineConfig;
use crate::error::Result;
use crate::fretboard::{pitch_class_name, Fretboard};
use crate::selection::select_positions;
use crate::triad::{build_major_triad, Triad};
use crate::types::{StringGroupResult, TriadsResult};
use crate::voicing::{find_all_voicings, string_names, Voicing, STRING_GROUPS};
use tracing::debug;

/// Voicing engine bound to one fretboard and configuration.
///
/// The fretboard is built once in the constructor and reused by every call.
/// The engine holds no other state, so one instance can serve any number of
/// keys, from any number of threads.
///
/// # Example
/// ```rust
/// use triads::{EngineConfig, TriadEngine};
///
/// let engine = TriadEngine::new(EngineConfig { max_fret: 12, max_stretch: 4 })?;
/// for key in ["C", "G", "D"] {
///     let result = engine.generate(key)?;
///     assert_eq!(result.string_groups.len(), 4);
/// }
/// # Ok::<(), triads::TriadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TriadEngine {
    fretboard: Fretboard,
    config: EngineConfig,
}

impl Default for TriadEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            fretboard: Fretboard::with_max_fret(config.max_fret),
            config,
        }
    }
}

impl TriadEngine {
    /// Validate `config` and build its fretboard
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fretboard: Fretboard::with_max_fret(config.max_fret),
            config,
        })
    }

    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every valid voicing of `triad` on each of the four string groups
    pub fn group_voicings(&self, triad: &Triad) -> [Vec<Voicing>; 4] {
        STRING_GROUPS.map(|group| {
            find_all_voicings(triad, group, &self.fretboard, self.config.max_stretch)
        })
    }

    /// Voicings and selected positions for a major key.
    ///
    /// # Errors
    /// Returns [`TriadError::InvalidNoteName`](crate::TriadError::InvalidNoteName)
    /// if `key` is not a note name. Groups with few voicings are not an error;
    /// they simply carry fewer than four positions.
    pub fn generate(&self, key: &str) -> Result<TriadsResult> {
        let triad = build_major_triad(key)?;
        let groups = self.group_voicings(&triad);
        debug!(
            key,
            voicings = ?groups.iter().map(Vec::len).collect::<Vec<_>>(),
            "enumerated voicings"
        );

        let selection = select_positions(&groups, &triad);

        let string_groups = STRING_GROUPS
            .iter()
            .zip(selection.groups)
            .map(|(group, voicings)| StringGroupResult {
                string_group: *group,
                string_names: string_names(group),
                voicings,
            })
            .collect();

        Ok(TriadsResult {
            key: pitch_class_name(triad.root).to_string(),
            triad_note_names: triad.note_names(),
            string_groups,
            mode: selection.mode,
        })
    }
}

/// Generate triad voicing data for a major key.
///
/// This is the main entry point for the library. It uses the standard
/// settings: frets 0-18 and a maximum stretch of 5 frets.
///
/// # Example
/// ```rust
/// use triads::generate_triads_data;
///
/// let result = generate_triads_data("G")?;
/// let dgb = result.group([2, 3, 4]).unwrap();
/// assert_eq!(dgb.voicings[0].voicing.frets, [0, 0, 0]);
/// # Ok::<(), triads::TriadError>(())
/// ```
pub fn generate_triads_data(key: &str) -> Result<TriadsResult> {
    TriadEngine::default().generate(key)
}

/// Generate triad voicing data with a custom configuration.
///
/// # Errors
/// Returns [`TriadError::ConfigError`](crate::TriadError::ConfigError) for an
/// invalid configuration and
/// [`TriadError::InvalidNoteName`](crate::TriadError::InvalidNoteName) for an
/// unknown key.
pub fn generate_triads_data_with(key: &str, config: &EngineConfig) -> Result<TriadsResult> {
    TriadEngine::new(*config)?.generate(key)
}
