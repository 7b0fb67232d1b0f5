//! Command-line interface for strictly_lanes.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_bowling::{BowlingResult, GameConfig};
use tracing::instrument;

/// Strictly Lanes - drive a bowling state machine from the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_lanes")]
#[command(about = "Play bowling games through an explicit state machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Game shape and output options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct LaneArgs {
    /// TOML file with frame_count, turn_count and frame_size
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of frames
    #[arg(long)]
    pub frames: Option<u32>,

    /// Override the turns allowed per frame
    #[arg(long)]
    pub turns: Option<u32>,

    /// Override the pins standing at the start of a frame
    #[arg(long)]
    pub pins: Option<u32>,

    /// Print the full history as JSON instead of a transcript
    #[arg(long)]
    pub json: bool,
}

impl LaneArgs {
    /// Resolves the game configuration: file (or defaults), then flags.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> BowlingResult<GameConfig> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        Ok(base.with_overrides(self.frames, self.turns, self.pins))
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game with the given hit counts, one per turn
    Play {
        /// Lane options
        #[command(flatten)]
        lane: LaneArgs,

        /// Pins knocked down by each roll, in order
        rolls: Vec<u32>,
    },

    /// Play a game to the end, knocking down round(pins_left * chance) pins
    Simulate {
        /// Lane options
        #[command(flatten)]
        lane: LaneArgs,

        /// Chances in [0, 1], cycled one per roll
        #[arg(long, value_delimiter = ',', default_value = "1.0")]
        chances: Vec<f64>,
    },
}
