//! Append-only arena of every state a game has passed through.
//!
//! States never hold references to one another. Each [`Node`] records the
//! [`StateId`] of its `parent` (one level up the hierarchy) and its `prev`
//! (the state it directly follows), and every transition appends a new node.
//!
//! | State       | parent | prev                                   |
//! |-------------|--------|----------------------------------------|
//! | Game        | none   | none                                   |
//! | Frame       | Game   | Game, or the previous FrameResult      |
//! | Turn        | Frame  | Frame, or the previous TurnResult      |
//! | TurnResult  | Frame  | Turn                                   |
//! | FrameResult | Game   | the closing TurnResult                 |
//! | GameResult  | Game   | the last FrameResult                   |

use crate::error::{BowlingError, BowlingErrorKind, BowlingResult};
use crate::frame::{Frame, FrameStep};
use crate::game::{Game, GameStep};
use crate::state::{Operation, State, StateId, StateKind};
use crate::turn::Turn;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A state together with its links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    state: State,
    parent: Option<StateId>,
    prev: Option<StateId>,
}

impl Node {
    /// The state itself.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The enclosing state one level up.
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// The state this one directly follows.
    pub fn prev(&self) -> Option<StateId> {
        self.prev
    }
}

/// Arena of states, indexed by [`StateId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    nodes: Vec<Node>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a game as a new root and returns its id.
    #[instrument(skip(self))]
    pub fn start(&mut self, game: Game) -> StateId {
        let id = StateId::new(self.nodes.len());
        self.nodes.push(Node {
            state: State::Game(game),
            parent: None,
            prev: None,
        });
        debug!(%id, "Game started");
        id
    }

    pub(crate) fn push(&mut self, state: impl Into<State>, parent: StateId, prev: StateId) -> StateId {
        let id = StateId::new(self.nodes.len());
        debug_assert!(parent < id && prev < id, "links must point backwards");
        let state = state.into();
        debug!(%id, %parent, %prev, kind = %state.kind(), "Appending state");
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            prev: Some(prev),
        });
        id
    }

    /// Number of states recorded.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node at `id`.
    #[track_caller]
    pub fn node(&self, id: StateId) -> BowlingResult<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnexpectedState(id)))
    }

    /// Returns the state at `id`.
    #[track_caller]
    pub fn state(&self, id: StateId) -> BowlingResult<&State> {
        self.node(id).map(Node::state)
    }

    /// Returns the state at `id`, if present.
    pub fn get(&self, id: StateId) -> Option<&State> {
        self.nodes.get(id.index()).map(Node::state)
    }

    /// Returns the parent link of `id`.
    pub fn parent(&self, id: StateId) -> Option<StateId> {
        self.nodes.get(id.index()).and_then(Node::parent)
    }

    /// Returns the prev link of `id`.
    pub fn prev(&self, id: StateId) -> Option<StateId> {
        self.nodes.get(id.index()).and_then(Node::prev)
    }

    /// Iterates over every recorded state in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (StateId::new(index), node))
    }

    /// Returns the game at `id`.
    #[track_caller]
    pub fn game(&self, id: StateId) -> BowlingResult<&Game> {
        self.state(id)?
            .as_game()
            .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnexpectedState(id)))
    }

    /// Returns the frame at `id`.
    #[track_caller]
    pub fn frame(&self, id: StateId) -> BowlingResult<&Frame> {
        self.state(id)?
            .as_frame()
            .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnexpectedState(id)))
    }

    /// Returns the turn at `id`.
    #[track_caller]
    pub fn turn(&self, id: StateId) -> BowlingResult<&Turn> {
        self.state(id)?
            .as_turn()
            .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnexpectedState(id)))
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Opens the next level below a Game or a Frame.
    ///
    /// A game opens frame 0; a frame issues turn 0 with a full rack. Calling
    /// this twice on the same state is outside the protocol and not guarded.
    #[instrument(skip(self))]
    pub fn begin(&mut self, id: StateId) -> BowlingResult<StateId> {
        let state = *self.state(id)?;
        match state {
            State::Game(game) => Ok(self.push(game.begin(id), id, id)),
            State::Frame(frame) => {
                let game = *self.game(frame.game())?;
                Ok(self.push(frame.begin(id, &game), id, id))
            }
            other => Err(BowlingError::protocol(other.kind(), Operation::Begin)),
        }
    }

    /// Rolls the Turn at `id`, recording a TurnResult owned by its frame.
    #[instrument(skip(self))]
    pub fn roll(&mut self, id: StateId, hit_count: u32) -> BowlingResult<StateId> {
        let state = *self.state(id)?;
        match state {
            State::Turn(turn) => {
                if hit_count > turn.pins_left() {
                    debug!(hit_count, pins_left = turn.pins_left(), "Roll overshoots pins left");
                }
                Ok(self.push(turn.roll(id, hit_count), turn.frame(), id))
            }
            other => Err(BowlingError::protocol(other.kind(), Operation::Roll)),
        }
    }

    /// Hands `result` to `receiver` and records whatever it decides.
    ///
    /// Only a Frame accepts a TurnResult and only a Game accepts a
    /// FrameResult. Any other pairing is a protocol violation.
    #[instrument(skip(self))]
    pub fn receive(&mut self, receiver: StateId, result: StateId) -> BowlingResult<StateId> {
        let pair = (*self.state(receiver)?, *self.state(result)?);
        match pair {
            (State::Frame(frame), State::TurnResult(outcome)) => {
                let turn = *self.turn(outcome.turn())?;
                Ok(match frame.receive(&turn, &outcome) {
                    FrameStep::Turn(next) => self.push(next, receiver, result),
                    FrameStep::Close(closed) => self.push(closed, frame.game(), result),
                })
            }
            (State::Game(game), State::FrameResult(outcome)) => {
                let frame = *self.frame(outcome.frame())?;
                Ok(match game.receive(&frame) {
                    GameStep::Frame(next) => self.push(next, receiver, result),
                    GameStep::Finish(done) => self.push(done, receiver, result),
                })
            }
            (to, from) => {
                warn!(receiver = %to.kind(), result = %from.kind(), "Rejected result");
                Err(BowlingError::protocol(to.kind(), Operation::Receive))
            }
        }
    }

    /// Continues from a TurnResult or FrameResult by handing it to its parent.
    #[instrument(skip(self))]
    pub fn resume(&mut self, id: StateId) -> BowlingResult<StateId> {
        let node = *self.node(id)?;
        match node.state.kind() {
            StateKind::TurnResult | StateKind::FrameResult => {
                let parent = node
                    .parent
                    .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnexpectedState(id)))?;
                self.receive(parent, id)
            }
            kind => Err(BowlingError::protocol(kind, Operation::Continue)),
        }
    }

    /// Walks backwards from `id`, following `prev` and falling back to
    /// `parent`, and returns the first state matching `predicate`.
    pub fn find_back(&self, id: StateId, predicate: impl Fn(&State) -> bool) -> Option<StateId> {
        let mut current = Some(id);
        while let Some(at) = current {
            let node = self.nodes.get(at.index())?;
            if predicate(&node.state) {
                return Some(at);
            }
            current = node.prev.or(node.parent);
        }
        None
    }
}
