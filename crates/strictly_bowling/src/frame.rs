//! Frames: bounded runs of turns and their results.

use crate::game::Game;
use crate::state::StateId;
use crate::turn::{Turn, TurnResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A frame within a game.
///
/// Issues turns until either every pin is down or the turn budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    index: u32,
    turn_count: u32,
    game: StateId,
}

impl Frame {
    pub(crate) fn new(index: u32, turn_count: u32, game: StateId) -> Self {
        Self {
            index,
            turn_count,
            game,
        }
    }

    /// Zero-based position within the game.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Turns allowed in this frame, copied from the game.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The owning game.
    pub fn game(&self) -> StateId {
        self.game
    }

    /// Issues the first turn against a full rack. `id` is this frame's place
    /// in the history.
    #[instrument(skip(self, game), fields(frame = self.index))]
    pub fn begin(&self, id: StateId, game: &Game) -> Turn {
        Turn::new(0, game.frame_size(), id)
    }

    /// Decides what follows a roll in this frame.
    ///
    /// All pins down is checked before the turn budget; either closes the
    /// frame. A roll that overshoots the pins left still counts as all down.
    #[instrument(skip(self), fields(frame = self.index))]
    pub fn receive(&self, turn: &Turn, result: &TurnResult) -> FrameStep {
        if result.hit_count() >= turn.pins_left() {
            debug!("All pins down");
            return FrameStep::Close(FrameResult::new(turn.frame()));
        }

        if turn.index() + 1 >= self.turn_count {
            debug!(turns = self.turn_count, "Out of turns");
            return FrameStep::Close(FrameResult::new(turn.frame()));
        }

        FrameStep::Turn(Turn::new(
            turn.index() + 1,
            turn.pins_left() - result.hit_count(),
            turn.frame(),
        ))
    }
}

/// The outcome of a finished frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameResult {
    frame: StateId,
}

impl FrameResult {
    pub(crate) fn new(frame: StateId) -> Self {
        Self { frame }
    }

    /// The frame this result closes.
    pub fn frame(&self) -> StateId {
        self.frame
    }
}

/// What a frame produces after receiving a turn result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStep {
    /// Another turn is owed.
    Turn(Turn),
    /// The frame is over.
    Close(FrameResult),
}
