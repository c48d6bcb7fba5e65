//! Generator tuning
//!
//! The defaults reproduce the shipped game's levels exactly. Changing any
//! value changes which boards a given seed produces.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ArrowError, Result};

/// Data-driven generator parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Board edge length
    pub board_size: usize,
    /// Candidates are sampled from this many entries at the front of the pool
    pub candidate_window: usize,
    /// Placement attempts allowed per targeted block
    pub attempts_per_block: u32,
    /// Cells always left free (target is capped at `size^2 - margin`)
    pub saturation_margin: usize,
    /// Level number after which block counts stop growing
    pub progression_cap: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            board_size: GRID_SIZE,
            candidate_window: CANDIDATE_WINDOW,
            attempts_per_block: ATTEMPTS_PER_BLOCK,
            saturation_margin: SATURATION_MARGIN,
            progression_cap: PROGRESSION_CAP,
        }
    }
}

impl GeneratorSettings {
    /// Upper bound on blocks per board
    pub fn max_blocks(&self) -> usize {
        (self.board_size * self.board_size).saturating_sub(self.saturation_margin)
    }

    /// Reject settings the generator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(ArrowError::InvalidSettings("board_size must be at least 1".into()));
        }
        let fits = self
            .board_size
            .checked_mul(self.board_size)
            .is_some_and(|cells| u32::try_from(cells).is_ok());
        if !fits {
            return Err(ArrowError::InvalidSettings(format!(
                "board_size {} is too large",
                self.board_size
            )));
        }
        if self.candidate_window == 0 {
            return Err(ArrowError::InvalidSettings(
                "candidate_window must be at least 1".into(),
            ));
        }
        if self.attempts_per_block == 0 {
            return Err(ArrowError::InvalidSettings(
                "attempts_per_block must be at least 1".into(),
            ));
        }
        if self.max_blocks() == 0 {
            return Err(ArrowError::InvalidSettings(format!(
                "saturation_margin {} leaves no room on a {}x{} board",
                self.saturation_margin, self.board_size, self.board_size
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded generator settings from {}", path.display());
        Ok(settings)
    }
}
