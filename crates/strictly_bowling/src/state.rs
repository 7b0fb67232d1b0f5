//! The closed set of states a bowling game passes through.
//!
//! Every state lives in a [`History`](crate::History) arena and is addressed
//! by its [`StateId`]. Dispatch over [`State`] is an exhaustive `match`, so a
//! new variant cannot be added without every transition noticing.

use crate::frame::{Frame, FrameResult};
use crate::game::{Game, GameResult};
use crate::turn::{Turn, TurnResult};
use serde::{Deserialize, Serialize};

/// Index of a state within its history arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{}", _0)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// Creates an id from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Discriminant of a [`State`], used for logging and error reporting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum StateKind {
    /// A game waiting to open its first frame.
    Game,
    /// A frame waiting to issue its first turn.
    Frame,
    /// A turn waiting for a roll.
    Turn,
    /// The outcome of a roll, not yet folded into the frame.
    TurnResult,
    /// The outcome of a frame, not yet folded into the game.
    FrameResult,
    /// Terminal state.
    GameResult,
}

impl StateKind {
    /// Returns true if no transition leaves this kind of state.
    pub fn is_terminal(self) -> bool {
        matches!(self, StateKind::GameResult)
    }
}

/// Transition names, used when a state rejects an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// Open the next level of the hierarchy.
    Begin,
    /// Knock down pins.
    Roll,
    /// Accept a result from a child state.
    Receive,
    /// Hand a result up to its parent.
    Continue,
}

/// A state in the bowling game's chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum State {
    /// Top-level game.
    Game(Game),
    /// A frame within the game.
    Frame(Frame),
    /// A request for a roll.
    Turn(Turn),
    /// The outcome of a roll.
    TurnResult(TurnResult),
    /// The outcome of a frame.
    FrameResult(FrameResult),
    /// End of the game.
    GameResult(GameResult),
}

impl State {
    /// Returns the discriminant of this state.
    pub fn kind(&self) -> StateKind {
        match self {
            State::Game(_) => StateKind::Game,
            State::Frame(_) => StateKind::Frame,
            State::Turn(_) => StateKind::Turn,
            State::TurnResult(_) => StateKind::TurnResult,
            State::FrameResult(_) => StateKind::FrameResult,
            State::GameResult(_) => StateKind::GameResult,
        }
    }

    /// Returns the game, if this is one.
    pub fn as_game(&self) -> Option<&Game> {
        match self {
            State::Game(game) => Some(game),
            _ => None,
        }
    }

    /// Returns the frame, if this is one.
    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            State::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    /// Returns the turn, if this is one.
    pub fn as_turn(&self) -> Option<&Turn> {
        match self {
            State::Turn(turn) => Some(turn),
            _ => None,
        }
    }

    /// Returns the turn result, if this is one.
    pub fn as_turn_result(&self) -> Option<&TurnResult> {
        match self {
            State::TurnResult(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the frame result, if this is one.
    pub fn as_frame_result(&self) -> Option<&FrameResult> {
        match self {
            State::FrameResult(result) => Some(result),
            _ => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Game(game) => write!(
                f,
                "Game({} frames x {} turns, {} pins)",
                game.frame_count(),
                game.turn_count(),
                game.frame_size()
            ),
            State::Frame(frame) => write!(f, "Frame {}", frame.index()),
            State::Turn(turn) => write!(f, "Turn {} ({} pins left)", turn.index(), turn.pins_left()),
            State::TurnResult(result) => write!(f, "TurnResult ({} hit)", result.hit_count()),
            State::FrameResult(result) => write!(f, "FrameResult (frame {})", result.frame()),
            State::GameResult(_) => write!(f, "GameResult"),
        }
    }
}
