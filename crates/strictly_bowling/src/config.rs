//! Game configuration loaded from TOML.

use crate::error::{BowlingError, BowlingErrorKind, BowlingResult};
use crate::game::Game;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Shape of a game: frames, turns per frame and pins per rack.
///
/// Missing keys fall back to a ten-frame, two-turn, ten-pin game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total frames in the game.
    #[serde(default = "default_frame_count")]
    frame_count: u32,

    /// Turns allowed per frame.
    #[serde(default = "default_turn_count")]
    turn_count: u32,

    /// Pins standing at the start of each frame.
    #[serde(default = "default_frame_size")]
    frame_size: u32,
}

fn default_frame_count() -> u32 {
    10
}

fn default_turn_count() -> u32 {
    2
}

fn default_frame_size() -> u32 {
    10
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_count: default_frame_count(),
            turn_count: default_turn_count(),
            frame_size: default_frame_size(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> BowlingResult<Self> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            BowlingError::new(BowlingErrorKind::Config(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> BowlingResult<Self> {
        toml::from_str(content).map_err(|e| {
            BowlingError::new(BowlingErrorKind::Config(format!(
                "Failed to parse config: {}",
                e
            )))
        })
    }

    /// Replaces any field given as `Some`.
    pub fn with_overrides(
        self,
        frame_count: Option<u32>,
        turn_count: Option<u32>,
        frame_size: Option<u32>,
    ) -> Self {
        Self {
            frame_count: frame_count.unwrap_or(self.frame_count),
            turn_count: turn_count.unwrap_or(self.turn_count),
            frame_size: frame_size.unwrap_or(self.frame_size),
        }
    }

    /// Builds the game this configuration describes.
    #[track_caller]
    pub fn game(&self) -> BowlingResult<Game> {
        Game::new(self.frame_count, self.turn_count, self.frame_size)
    }
}
