//! First-class invariants over a game's history.
//!
//! Each invariant is a logical property of the whole arena. They are checked
//! after every play in debug builds and can be tested independently.

use crate::history::History;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collected(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collected(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collected(violations)
    }
}

pub mod budgets;
pub mod carry_over;
pub mod full_rack;

pub use budgets::{FrameBudgetInvariant, TurnBudgetInvariant};
pub use carry_over::PinsCarryOverInvariant;
pub use full_rack::FirstTurnFullRackInvariant;

/// All bowling invariants as a composable set.
pub type BowlingInvariants = (
    FirstTurnFullRackInvariant,
    PinsCarryOverInvariant,
    TurnBudgetInvariant,
    FrameBudgetInvariant,
);

/// Asserts that every invariant holds (panics on violation in debug builds).
pub fn assert_invariants(history: &History) {
    if cfg!(debug_assertions)
        && let Err(violations) = BowlingInvariants::check_all(history)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        panic!("History invariants violated: {:?}", violations);
    }
}
