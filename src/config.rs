//! Engine configuration
//!
//! The defaults are frets 0-18 and a stretch of 5. A YAML
//! document can override either value:
//!
//! ```yaml
//! max-fret: 15
//! max-stretch: 4
//! ```

use crate::error::{Result, TriadError};
use crate::fretboard::MAX_FRET;
use crate::voicing::DEFAULT_MAX_STRETCH;
use serde::Deserialize;

/// Highest fret a configuration may request
pub const FRET_LIMIT: u8 = 24;

/// Settings for voicing enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Highest fret searched on every string (inclusive)
    pub max_fret: u8,
    /// Largest allowed distance between the lowest and highest fret of a voicing
    pub max_stretch: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fret: MAX_FRET,
            max_stretch: DEFAULT_MAX_STRETCH,
        }
    }
}

/// Raw config document as written in YAML
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    max_fret: Option<u8>,
    max_stretch: Option<u8>,
}

impl EngineConfig {
    /// Parse a YAML configuration document. Missing keys keep their defaults.
    ///
    /// # Example
    /// ```
    /// use triads::EngineConfig;
    ///
    /// let config = EngineConfig::from_yaml("max-fret: 15").unwrap();
    /// assert_eq!(config.max_fret, 15);
    /// assert_eq!(config.max_stretch, 5);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| TriadError::ConfigError(e.to_string()))?
        };

        let defaults = Self::default();
        let config = Self {
            max_fret: raw.max_fret.unwrap_or(defaults.max_fret),
            max_stretch: raw.max_stretch.unwrap_or(defaults.max_stretch),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a searchable fretboard
    pub fn validate(&self) -> Result<()> {
        if self.max_fret > FRET_LIMIT {
            return Err(TriadError::ConfigError(format!(
                "max-fret must be at most {}, got {}",
                FRET_LIMIT, self.max_fret
            )));
        }
        if self.max_stretch == 0 {
            return Err(TriadError::ConfigError(
                "max-stretch must be at least 1".to_string(),
            ));
        }
        if self.max_stretch > self.max_fret {
            return Err(TriadError::ConfigError(format!(
                "max-stretch ({}) cannot exceed max-fret ({})",
                self.max_stretch, self.max_fret
            )));
        }
        Ok(())
    }
}
