//! Events the core emits for a presentation layer.

use super::rules::Line;
use super::{Cell, Position, Side};
use serde::{Deserialize, Serialize};

/// A change a renderer should reflect.
///
/// A displacement produces two `CellChanged` events: the vacated cell
/// first, then the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell gained or lost a piece.
    CellChanged {
        /// The cell.
        position: Position,
        /// Its new content.
        cell: Cell,
    },
    /// The side to move changed.
    TurnChanged(Side),
    /// A round was won along `line`.
    RoundWon {
        /// The winning side.
        side: Side,
        /// The completed line.
        line: Line,
    },
    /// Scores after a round.
    ScoreChanged {
        /// Player round wins.
        player: u32,
        /// Opponent round wins.
        opponent: u32,
    },
    /// A side reached the win threshold.
    MatchOver(Side),
    /// The board was cleared for a new round.
    RoundReset,
    /// Scores and rounds were reset.
    MatchReset,
}
