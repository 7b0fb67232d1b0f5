//! The top of the hierarchy: a game and its terminal result.

use crate::error::{BowlingError, BowlingErrorKind, BowlingResult};
use crate::frame::Frame;
use crate::state::StateId;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game of `frame_count` frames, each allowing `turn_count` rolls at a
/// rack of `frame_size` pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    frame_count: u32,
    turn_count: u32,
    frame_size: u32,
}

impl Game {
    /// Creates a game, rejecting any zero count or size.
    #[track_caller]
    #[instrument]
    pub fn new(frame_count: u32, turn_count: u32, frame_size: u32) -> BowlingResult<Self> {
        for (name, value) in [
            ("frame_count", frame_count),
            ("turn_count", turn_count),
            ("frame_size", frame_size),
        ] {
            if value == 0 {
                return Err(BowlingError::new(BowlingErrorKind::InvalidGame(format!(
                    "{} must be positive",
                    name
                ))));
            }
        }

        Ok(Self {
            frame_count,
            turn_count,
            frame_size,
        })
    }

    /// Total frames in the game.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Turns allowed per frame.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Pins standing at the start of every frame.
    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }

    /// Opens the first frame. `id` is this game's place in the history.
    #[instrument(skip(self))]
    pub fn begin(&self, id: StateId) -> Frame {
        Frame::new(0, self.turn_count, id)
    }

    /// Decides what follows a finished frame.
    ///
    /// This is the only place a game ends.
    #[instrument(skip(self, frame), fields(frame = frame.index()))]
    pub fn receive(&self, frame: &Frame) -> GameStep {
        let next = frame.index() + 1;
        if next < self.frame_count {
            debug!(next, "Opening next frame");
            GameStep::Frame(Frame::new(next, self.turn_count, frame.game()))
        } else {
            debug!(frames = next, "Game over");
            GameStep::Finish(GameResult::new(next))
        }
    }
}

/// Terminal state. Records how many frames were played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    frames_played: u32,
}

impl GameResult {
    fn new(frames_played: u32) -> Self {
        Self { frames_played }
    }

    /// Frames played before the game ended.
    pub fn frames_played(&self) -> u32 {
        self.frames_played
    }
}

/// What a game produces after receiving a frame result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStep {
    /// Another frame is owed.
    Frame(Frame),
    /// The game is over.
    Finish(GameResult),
}
