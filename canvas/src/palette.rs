//! Colour palette: background selection and random fill picks.
//!
//! One colour is taken out of the palette at startup to become the page
//! background; fills are then drawn from whatever remains so a triangle never
//! disappears into the background.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use rand::Rng;

use crate::config::ConfigError;

/// Fill colours plus the background colour reserved from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    fills: Vec<String>,
    background: String,
}

impl Palette {
    /// Pick a background at random from `colours` and keep the rest as fills.
    ///
    /// A single-colour palette keeps that colour for both roles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPalette`] if `colours` is empty.
    pub fn with_random_background<R: Rng + ?Sized>(colours: &[String], rng: &mut R) -> Result<Self, ConfigError> {
        if colours.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let index = rng.random_range(0..colours.len());
        Ok(Self::with_background_at(colours, index))
    }

    /// Reserve `colours[index]` as the background. Out-of-range indices wrap.
    ///
    /// `colours` must be non-empty.
    #[must_use]
    fn with_background_at(colours: &[String], index: usize) -> Self {
        let index = index % colours.len();
        let background = colours[index].clone();
        let mut fills = colours.to_vec();
        if fills.len() > 1 {
            fills.remove(index);
        }
        Self { fills, background }
    }

    /// The colour reserved for the page background.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Colours available for triangle fills.
    #[must_use]
    pub fn fills(&self) -> &[String] {
        &self.fills
    }

    /// A uniformly random fill colour.
    #[must_use]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.fills[rng.random_range(0..self.fills.len())].clone()
    }
}
