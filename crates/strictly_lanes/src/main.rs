//! Strictly Lanes - command-line driver for strictly_bowling games.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, LaneArgs};
use strictly_bowling::{ChanceCycle, History, Player, StateId, Tally};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { lane, rolls } => run_play(lane, rolls),
        Command::Simulate { lane, chances } => run_simulate(lane, chances),
    }
}

/// Builds the configured game and appends it to a fresh history.
#[instrument]
fn open_lane(lane: &LaneArgs) -> Result<(History, StateId)> {
    let config = lane.game_config().context("Failed to resolve game config")?;
    let game = config.game().context("Failed to build game")?;
    info!(?config, "Lane open");

    let mut history = History::new();
    let start = history.start(game);
    Ok((history, start))
}

/// Plays scripted rolls.
#[instrument(skip(lane))]
fn run_play(lane: LaneArgs, rolls: Vec<u32>) -> Result<()> {
    let (mut history, start) = open_lane(&lane)?;
    let mut supply = rolls.into_iter();
    let tally = Player::play(&mut history, start, supply.by_ref()).context("Play failed")?;
    let leftover = supply.len();
    if leftover > 0 {
        warn!(leftover, "Game ended before every roll was used");
    }
    print_report(&lane, &history, &tally)
}

/// Plays a game to the end with a chance-cycling bowler.
#[instrument(skip(lane))]
fn run_simulate(lane: LaneArgs, chances: Vec<f64>) -> Result<()> {
    let (mut history, start) = open_lane(&lane)?;
    let mut bowler = ChanceCycle::new(chances).context("Invalid chances")?;
    let tally = Player::play_out(&mut history, start, &mut bowler).context("Simulation failed")?;
    print_report(&lane, &history, &tally)
}

/// Prints the transcript, or JSON when requested.
#[instrument(skip(history, tally))]
fn print_report(lane: &LaneArgs, history: &History, tally: &Tally) -> Result<()> {
    let text = if lane.json {
        report::json(history, tally)?
    } else {
        report::transcript(history, tally)?
    };
    println!("{}", text);
    Ok(())
}
