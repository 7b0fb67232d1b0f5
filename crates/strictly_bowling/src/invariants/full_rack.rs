//! Full rack invariant: every frame opens with `frame_size` pins standing.

use super::Invariant;
use crate::history::History;
use crate::state::State;

/// Invariant: turn 0 of every frame has `pins_left == game.frame_size`.
pub struct FirstTurnFullRackInvariant;

impl Invariant<History> for FirstTurnFullRackInvariant {
    fn holds(history: &History) -> bool {
        history.iter().all(|(_, node)| match node.state() {
            State::Turn(turn) if turn.index() == 0 => history
                .frame(turn.frame())
                .and_then(|frame| history.game(frame.game()))
                .is_ok_and(|game| game.frame_size() == turn.pins_left()),
            _ => true,
        })
    }

    fn description() -> &'static str {
        "First turn of a frame faces a full rack"
    }
}
