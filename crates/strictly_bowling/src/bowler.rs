//! Roll policies: how many pins a bowler knocks down on a given turn.

use crate::turn::Turn;
use tracing::instrument;

/// Decides the hit count for a pending turn.
pub trait Bowler {
    /// Returns the pins knocked down on `turn`.
    fn bowl(&mut self, turn: &Turn) -> u32;
}

impl<F> Bowler for F
where
    F: FnMut(&Turn) -> u32,
{
    fn bowl(&mut self, turn: &Turn) -> u32 {
        self(turn)
    }
}

/// Never hits a pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gutter;

impl Bowler for Gutter {
    fn bowl(&mut self, _turn: &Turn) -> u32 {
        0
    }
}

/// Always clears the pins left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strike;

impl Bowler for Strike {
    fn bowl(&mut self, turn: &Turn) -> u32 {
        turn.pins_left()
    }
}

/// Error building a [`ChanceCycle`].
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ChanceError {
    /// No chances were given.
    #[display("At least one chance is required")]
    Empty,

    /// A chance fell outside `[0, 1]`.
    #[display("Chance {} is outside [0, 1]", _0)]
    OutOfRange(f64),
}

impl std::error::Error for ChanceError {}

/// Cycles through a list of chances, knocking down
/// `round(pins_left * chance)` pins each turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChanceCycle {
    chances: Vec<f64>,
    next: usize,
}

impl ChanceCycle {
    /// Creates a cycle over `chances`, each in `[0, 1]`.
    #[instrument]
    pub fn new(chances: Vec<f64>) -> Result<Self, ChanceError> {
        if chances.is_empty() {
            return Err(ChanceError::Empty);
        }
        if let Some(bad) = chances.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(ChanceError::OutOfRange(*bad));
        }
        Ok(Self { chances, next: 0 })
    }

    /// The chances in cycle order.
    pub fn chances(&self) -> &[f64] {
        &self.chances
    }
}

impl Bowler for ChanceCycle {
    fn bowl(&mut self, turn: &Turn) -> u32 {
        let chance = self.chances[self.next];
        self.next = (self.next + 1) % self.chances.len();
        (f64::from(turn.pins_left()) * chance).round() as u32
    }
}

/// Replays a fixed list of hits, then rolls gutter balls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripted {
    hits: std::collections::VecDeque<u32>,
}

impl Scripted {
    /// Creates a bowler that replays `hits` in order.
    pub fn new(hits: impl IntoIterator<Item = u32>) -> Self {
        Self {
            hits: hits.into_iter().collect(),
        }
    }
}

impl Bowler for Scripted {
    fn bowl(&mut self, _turn: &Turn) -> u32 {
        self.hits.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateId;

    fn turn(pins: u32) -> Turn {
        Turn::new(0, pins, StateId::new(1))
    }

    #[test]
    fn test_chance_cycle_rounds_and_wraps() {
        let mut bowler = ChanceCycle::new(vec![0.5, 1.0]).unwrap();
        assert_eq!(bowler.bowl(&turn(9)), 5);
        assert_eq!(bowler.bowl(&turn(4)), 4);
        assert_eq!(bowler.bowl(&turn(10)), 5);
    }

    #[test]
    fn test_chance_cycle_rejects_bad_input() {
        assert_eq!(ChanceCycle::new(vec![]).unwrap_err(), ChanceError::Empty);
        assert_eq!(
            ChanceCycle::new(vec![0.2, 1.5]).unwrap_err(),
            ChanceError::OutOfRange(1.5)
        );
    }

    #[test]
    fn test_scripted_falls_back_to_gutter() {
        let mut bowler = Scripted::new([3, 4]);
        assert_eq!(bowler.bowl(&turn(10)), 3);
        assert_eq!(bowler.bowl(&turn(7)), 4);
        assert_eq!(bowler.bowl(&turn(3)), 0);
    }

    #[test]
    fn test_closure_is_a_bowler() {
        let mut half = |t: &Turn| t.pins_left() / 2;
        assert_eq!(half.bowl(&turn(10)), 5);
        assert_eq!(Strike.bowl(&turn(6)), 6);
        assert_eq!(Gutter.bowl(&turn(6)), 0);
    }
}
