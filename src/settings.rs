//! Game rules and runtime settings
//!
//! Loaded from a JSON file. Missing fields fall back to the standard rules.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{WIN_BY, WINNING_SCORE};
use crate::sim::Team;

/// Errors raised while reading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}

/// Scoring rules for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Score a team must reach to be able to win
    pub winning_score: u32,
    /// Lead required over the other team once the winning score is reached
    pub win_by: u32,
    /// Team throwing first in round 1
    pub starting_team: Team,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,
            win_by: WIN_BY,
            starting_team: Team::Red,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.winning_score == 0 {
            return Err(SettingsError::InvalidRule(
                "winning_score must be at least 1".to_string(),
            ));
        }
        if self.win_by == 0 {
            return Err(SettingsError::InvalidRule(
                "win_by must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// True once either score has reached the target with the required lead
    pub fn is_winning(&self, red: u32, blue: u32) -> bool {
        let reached = red >= self.winning_score || blue >= self.winning_score;
        reached && red.abs_diff(blue) >= self.win_by
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rules: Rules,
    /// Seed for the demo player (0 when absent)
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.rules.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }
}
