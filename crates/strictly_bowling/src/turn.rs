//! Turns and the results of rolling them.

use crate::state::StateId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request for a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    index: u32,
    pins_left: u32,
    frame: StateId,
}

impl Turn {
    pub(crate) fn new(index: u32, pins_left: u32, frame: StateId) -> Self {
        Self {
            index,
            pins_left,
            frame,
        }
    }

    /// Zero-based position within the frame.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Pins standing before this roll.
    pub fn pins_left(&self) -> u32 {
        self.pins_left
    }

    /// The owning frame.
    pub fn frame(&self) -> StateId {
        self.frame
    }

    /// Rolls this turn. `id` is this turn's place in the history.
    ///
    /// `hit_count` is not checked against [`pins_left`](Self::pins_left).
    #[instrument(skip(self), fields(turn = self.index, pins_left = self.pins_left))]
    pub fn roll(&self, id: StateId, hit_count: u32) -> TurnResult {
        TurnResult {
            turn: id,
            hit_count,
        }
    }
}

/// The outcome of one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnResult {
    turn: StateId,
    hit_count: u32,
}

impl TurnResult {
    /// The turn this result resolves.
    pub fn turn(&self) -> StateId {
        self.turn
    }

    /// Pins knocked down.
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }
}
