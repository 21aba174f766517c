//! # Error Types
//!
//! This module defines all error types for the triad voicing engine.
//!
//! The engine itself is a pure computation, so the only error a caller can
//! trigger through [`generate_triads_data()`](crate::generate_triads_data) is
//! an unknown key name. The remaining variants guard checked fretboard lookups
//! and configuration loading.
//!
//! ## Error Types
//! - `InvalidNoteName` - Key or root name that doesn't map to a pitch class
//! - `InvalidStringIndex` / `InvalidFretNumber` - Out-of-range fretboard lookups
//! - `ConfigError` - Invalid YAML or out-of-range engine settings
//! - `SerializeError` - JSON encoding failure
//!
//! Sparse results (fewer than 4 voicings in a group, fewer than 4 chains) are
//! not errors. They are handled by the selection fallback.
//!
//! ## Usage
//! ```rust
//! use triads::{generate_triads_data, TriadError};
//!
//! match generate_triads_data("H") {
//!     Ok(result) => println!("{} major", result.key),
//!     Err(TriadError::InvalidNoteName(name)) => eprintln!("No such key: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriadError {
    /// The key or root name doesn't resolve to a pitch class.
    ///
    /// # Example
    /// ```
    /// # use triads::TriadError;
    /// let err = TriadError::InvalidNoteName("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: 'H' (expected A-G with optional # or b)");
    /// ```
    #[error("Invalid note name: '{0}' (expected A-G with optional # or b)")]
    InvalidNoteName(String),

    /// A string index outside the six strings of the fretboard.
    #[error("Invalid string index: {string} (expected 0-5)")]
    InvalidStringIndex { string: usize },

    /// A fret beyond the fretboard's highest fret.
    #[error("Invalid fret number {fret} on string {string} (expected 0-{max_fret})")]
    InvalidFretNumber { string: usize, fret: u8, max_fret: u8 },

    /// Invalid engine configuration.
    ///
    /// # Example
    /// ```
    /// # use triads::TriadError;
    /// let err = TriadError::ConfigError("max-stretch must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: max-stretch must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A result could not be encoded as JSON.
    #[error("Failed to serialize result: {0}")]
    SerializeError(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TriadError>;
