//! The driver that walks a game's state chain and keeps score.
//!
//! A [`Tally`] is the fold accumulator: the current state plus the running
//! score. [`Player::step`] performs exactly one transition, and
//! [`Player::play`] folds a sequence of hit counts through the machine.

use crate::bowler::{Bowler, Gutter};
use crate::error::{BowlingError, BowlingResult};
use crate::history::History;
use crate::invariants::assert_invariants;
use crate::state::{Operation, State, StateId, StateKind};
use crate::turn::Turn;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a play stands: the current state and what it has scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Tally {
    state: StateId,
    #[new(default)]
    score: u64,
    #[new(default)]
    rolls: u64,
}

impl Tally {
    /// The current state.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Sum of every hit count folded in so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Turns rolled.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    fn at(self, state: StateId) -> Self {
        Self { state, ..self }
    }
}

/// Drives a game through its transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

impl Player {
    /// Performs the one transition the current state allows.
    ///
    /// Game and Frame begin, Turn rolls with `bowler`, TurnResult adds its
    /// hit count to the score and continues, FrameResult continues. A
    /// GameResult has nowhere to go and is a protocol violation.
    #[instrument(skip(history, bowler), fields(state = %tally.state))]
    pub fn step<B>(history: &mut History, tally: Tally, bowler: &mut B) -> BowlingResult<Tally>
    where
        B: Bowler + ?Sized,
    {
        let state = *history.state(tally.state)?;
        match state {
            State::Game(_) | State::Frame(_) => Ok(tally.at(history.begin(tally.state)?)),
            State::Turn(turn) => {
                let hits = bowler.bowl(&turn);
                debug!(turn = turn.index(), pins_left = turn.pins_left(), hits, "Rolling");
                let next = history.roll(tally.state, hits)?;
                Ok(Tally {
                    rolls: tally.rolls + 1,
                    ..tally.at(next)
                })
            }
            State::TurnResult(result) => {
                let next = history.resume(tally.state)?;
                Ok(Tally {
                    score: tally.score + u64::from(result.hit_count()),
                    ..tally.at(next)
                })
            }
            State::FrameResult(_) => Ok(tally.at(history.resume(tally.state)?)),
            State::GameResult(_) => Err(BowlingError::protocol(
                StateKind::GameResult,
                Operation::Continue,
            )),
        }
    }

    /// Advances through every state that needs no input, stopping at a
    /// pending Turn or the GameResult.
    fn settle(history: &mut History, mut tally: Tally) -> BowlingResult<Tally> {
        loop {
            match history.state(tally.state)?.kind() {
                StateKind::Turn | StateKind::GameResult => return Ok(tally),
                _ => tally = Self::step(history, tally, &mut Gutter)?,
            }
        }
    }

    /// Plays `hits` from `start`, one per Turn, and returns the final tally.
    ///
    /// Running out of hits at a pending Turn is not an error; the tally
    /// simply stops there. Once the GameResult is reached no further hit is
    /// pulled from `hits`, so an endless supply is fine.
    #[instrument(skip(history, hits))]
    pub fn play<I>(history: &mut History, start: StateId, hits: I) -> BowlingResult<Tally>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut hits = hits.into_iter();
        let mut tally = Self::settle(history, Tally::new(start))?;
        while !history.state(tally.state)?.kind().is_terminal() {
            let Some(hit) = hits.next() else {
                debug!("Hit supply exhausted at a pending turn");
                break;
            };
            let rolled = Self::step(history, tally, &mut |_: &Turn| hit)?;
            tally = Self::settle(history, rolled)?;
        }

        assert_invariants(history);
        let finished = history.state(tally.state)?.kind().is_terminal();
        info!(score = tally.score, rolls = tally.rolls, finished, "Play stopped");
        Ok(tally)
    }

    /// Plays from `start` to the GameResult, asking `bowler` for every roll.
    #[instrument(skip(history, bowler))]
    pub fn play_out<B>(history: &mut History, start: StateId, bowler: &mut B) -> BowlingResult<Tally>
    where
        B: Bowler + ?Sized,
    {
        let mut tally = Tally::new(start);
        while !history.state(tally.state)?.kind().is_terminal() {
            tally = Self::step(history, tally, bowler)?;
        }

        assert_invariants(history);
        info!(score = tally.score, rolls = tally.rolls, "Game played out");
        Ok(tally)
    }
}
