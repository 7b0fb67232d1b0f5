//! Strictly Bowling - a bowling game as an explicit state machine
//!
//! A game moves through a closed set of immutable states, each appended to
//! a [`History`] arena:
//!
//! ```text
//! Game ─begin→ Frame ─begin→ Turn ─roll→ TurnResult ─continue→ Turn | FrameResult
//! FrameResult ─continue→ Frame | GameResult
//! ```
//!
//! A frame closes when every pin is down or its turns run out; the game ends
//! after its last frame. [`Player`] walks the chain and keeps score.
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{Game, History, Player, StateKind};
//!
//! # fn example() -> Result<(), strictly_bowling::BowlingError> {
//! let mut history = History::new();
//! let game = history.start(Game::new(2, 2, 9)?);
//!
//! let tally = Player::play(&mut history, game, [1, 1, 1, 1])?;
//! assert_eq!(tally.score(), 4);
//! assert_eq!(history.state(tally.state())?.kind(), StateKind::GameResult);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bowler;
mod config;
mod error;
mod frame;
mod game;
mod history;
pub mod invariants;
mod player;
mod state;
mod turn;

pub use bowler::{Bowler, ChanceCycle, ChanceError, Gutter, Scripted, Strike};
pub use config::GameConfig;
pub use error::{BowlingError, BowlingErrorKind, BowlingResult};
pub use frame::{Frame, FrameResult, FrameStep};
pub use game::{Game, GameResult, GameStep};
pub use history::{History, Node};
pub use player::{Player, Tally};
pub use state::{Operation, State, StateId, StateKind};
pub use turn::{Turn, TurnResult};
