//! First-class action types for infinite tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the side's intent
//! and are validated before anything on the board changes.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A side placing a piece at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Where the piece lands.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// A move that was refused without touching any state.
///
/// The caller may simply re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RejectedMove {
    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Side),

    /// The round has already been won.
    #[display("Round is already over")]
    RoundOver,

    /// The match has been decided; only a new match accepts moves.
    #[display("Match is over")]
    MatchOver,

    /// Another move is still being resolved.
    #[display("A move is already in progress")]
    MoveInProgress,

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// A postcondition failed after the move was computed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
