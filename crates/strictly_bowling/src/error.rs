//! Error types for the bowling state machine.

use crate::state::{Operation, StateId, StateKind};
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while driving the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BowlingErrorKind {
    /// A state was asked to perform an operation it does not define.
    ///
    /// Always a programming error in the caller; never retried.
    #[display("Protocol violation: {} cannot {}", state, operation)]
    ProtocolViolation {
        /// Kind of the state that rejected the operation.
        state: StateKind,
        /// Operation that was attempted.
        operation: Operation,
    },

    /// A state id that the history does not hold.
    #[display("Unexpected state: {} is not in this history", _0)]
    UnexpectedState(StateId),

    /// A game shape with a zero count or size.
    #[display("Invalid game: {}", _0)]
    InvalidGame(String),

    /// Configuration could not be read or parsed.
    #[display("Config: {}", _0)]
    Config(String),
}

/// Bowling error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Bowling error: {} at {}:{}", kind, file, line)]
pub struct BowlingError {
    /// What went wrong.
    pub kind: BowlingErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BowlingError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BowlingErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`BowlingErrorKind::ProtocolViolation`].
    #[track_caller]
    pub fn protocol(state: StateKind, operation: Operation) -> Self {
        Self::new(BowlingErrorKind::ProtocolViolation { state, operation })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BowlingErrorKind {
        &self.kind
    }

    /// Returns true for protocol violations.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self.kind, BowlingErrorKind::ProtocolViolation { .. })
    }
}

impl From<BowlingErrorKind> for BowlingError {
    #[track_caller]
    fn from(kind: BowlingErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for bowling operations.
pub type BowlingResult<T> = Result<T, BowlingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = BowlingError::protocol(StateKind::GameResult, Operation::Begin);
        let text = err.to_string();
        assert!(text.contains("GameResult cannot begin"), "{text}");
        assert!(text.contains("error.rs"), "{text}");
    }

    #[test]
    fn test_kind_conversion() {
        let err: BowlingError = BowlingErrorKind::UnexpectedState(StateId::new(7)).into();
        assert!(!err.is_protocol_violation());
        assert_eq!(err.kind(), &BowlingErrorKind::UnexpectedState(StateId::new(7)));
    }
}
