//! Budget invariants: frames and turns never exceed what the game allows.

use super::Invariant;
use crate::history::History;
use crate::state::State;

/// Invariant: every frame copies the game's turn count, and no turn index
/// reaches it.
pub struct TurnBudgetInvariant;

impl Invariant<History> for TurnBudgetInvariant {
    fn holds(history: &History) -> bool {
        history.iter().all(|(_, node)| match node.state() {
            State::Frame(frame) => history
                .game(frame.game())
                .is_ok_and(|game| game.turn_count() == frame.turn_count()),
            State::Turn(turn) => history
                .frame(turn.frame())
                .is_ok_and(|frame| turn.index() < frame.turn_count()),
            _ => true,
        })
    }

    fn description() -> &'static str {
        "Frames copy the game's turn count and never exceed it"
    }
}

/// Invariant: frame indices stay below the game's frame count, and each
/// game ends at most once.
pub struct FrameBudgetInvariant;

impl Invariant<History> for FrameBudgetInvariant {
    fn holds(history: &History) -> bool {
        history.iter().all(|(id, node)| match node.state() {
            State::Frame(frame) => history
                .game(frame.game())
                .is_ok_and(|game| frame.index() < game.frame_count()),
            State::Game(_) => {
                history
                    .iter()
                    .filter(|(_, other)| {
                        matches!(other.state(), State::GameResult(_)) && other.parent() == Some(id)
                    })
                    .count()
                    <= 1
            }
            _ => true,
        })
    }

    fn description() -> &'static str {
        "Frames stay within the game's frame count and a game ends once"
    }
}
