//! Carry-over invariant: pins knocked down stay down within a frame.

use super::Invariant;
use crate::history::History;
use crate::state::State;

/// Invariant: a successor turn has `pins_left` equal to the previous turn's
/// `pins_left` minus the previous result's `hit_count`.
///
/// The chain is recovered from history: a successor turn's `prev` is the
/// previous TurnResult, whose `prev` is the previous Turn.
pub struct PinsCarryOverInvariant;

impl Invariant<History> for PinsCarryOverInvariant {
    fn holds(history: &History) -> bool {
        history.iter().all(|(id, node)| match node.state() {
            State::Turn(turn) if turn.index() > 0 => {
                let result = history
                    .prev(id)
                    .and_then(|p| history.get(p))
                    .and_then(State::as_turn_result);
                let previous = history
                    .prev(id)
                    .and_then(|p| history.prev(p))
                    .and_then(|p| history.get(p))
                    .and_then(State::as_turn);

                match (previous, result) {
                    (Some(previous), Some(result)) => previous
                        .pins_left()
                        .checked_sub(result.hit_count())
                        .is_some_and(|left| left == turn.pins_left()),
                    _ => false,
                }
            }
            _ => true,
        })
    }

    fn description() -> &'static str {
        "Successor turn starts with the pins the previous roll left"
    }
}
