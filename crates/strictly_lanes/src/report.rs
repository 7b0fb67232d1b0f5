//! Rendering a finished (or halted) play for the terminal.

use strictly_bowling::{BowlingResult, History, State, Tally};
use tracing::instrument;

fn depth(state: &State) -> usize {
    match state {
        State::Game(_) | State::GameResult(_) => 0,
        State::Frame(_) | State::FrameResult(_) => 1,
        State::Turn(_) | State::TurnResult(_) => 2,
    }
}

/// Renders every state in order, indented by its level, followed by the
/// score and where play stopped.
#[instrument(skip(history, tally))]
pub fn transcript(history: &History, tally: &Tally) -> BowlingResult<String> {
    let mut out = String::new();
    for (id, node) in history.iter() {
        let state = node.state();
        out.push_str(&format!(
            "{:>5} {}{}\n",
            id.to_string(),
            "  ".repeat(depth(state)),
            state
        ));
    }

    let stopped = history.state(tally.state())?;
    out.push_str(&format!(
        "score {} after {} rolls, stopped at {}",
        tally.score(),
        tally.rolls(),
        stopped
    ));
    Ok(out)
}

/// Renders the tally and the whole history as pretty JSON.
#[instrument(skip(history, tally))]
pub fn json(history: &History, tally: &Tally) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "tally": tally,
        "history": history,
    }))
}
