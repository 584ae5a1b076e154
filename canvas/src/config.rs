//! Engine configuration, parsed from JSON handed over by the host page.
//!
//! Every field has a default, so `{}` (or no config at all) yields the
//! stock behaviour: the clrs.cc palette, a 5px border and a 333ms disco beat.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_BORDER_INSET_PX, DEFAULT_DISCO_INTERVAL_MS, DEFAULT_LOG_LEVEL, DEFAULT_PALETTE};

/// Error returned by [`Config::from_json`] and palette construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into a [`Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The palette has no colours to draw with.
    #[error("palette must contain at least one colour")]
    EmptyPalette,
    /// A palette entry is an empty string.
    #[error("palette entry {0} is blank")]
    BlankColour(usize),
    /// The disco interval must be a positive number of milliseconds.
    #[error("disco interval must be greater than zero")]
    InvalidInterval,
    /// The border inset must be a finite, non-negative pixel width.
    #[error("invalid border inset: {0}")]
    InvalidBorder(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colours used for the background and triangle fills.
    pub palette: Vec<String>,
    /// Canvas border width in pixels, subtracted from pointer coordinates.
    pub border_inset: f64,
    /// Milliseconds between disco recolors.
    pub disco_interval_ms: u32,
    /// `log` level name for the browser console (`error` .. `trace`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            border_inset: DEFAULT_BORDER_INSET_PX,
            disco_interval_ms: DEFAULT_DISCO_INTERVAL_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(index) = self.palette.iter().position(|c| c.trim().is_empty()) {
            return Err(ConfigError::BlankColour(index));
        }
        if self.disco_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        if !self.border_inset.is_finite() || self.border_inset < 0.0 {
            return Err(ConfigError::InvalidBorder(self.border_inset));
        }
        Ok(())
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
