//! Piece cap invariant: no side ever holds more than three live pieces.

use super::super::{PIECE_CAP, RoundState, Side};
use super::Invariant;

/// Invariant: each side has at most [`PIECE_CAP`] pieces, on the board and
/// in the ledger.
pub struct PieceCapInvariant;

impl Invariant<RoundState> for PieceCapInvariant {
    fn holds(state: &RoundState) -> bool {
        [Side::Player, Side::Opponent].into_iter().all(|side| {
            state.board().count(side) <= PIECE_CAP && state.ledger().count(side) <= PIECE_CAP
        })
    }

    fn description() -> &'static str {
        "No side holds more than three live pieces"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_empty_round_holds() {
        assert!(PieceCapInvariant::holds(&RoundState::new(Side::Player)));
    }

    #[test]
    fn test_four_pieces_violates() {
        let mut state = RoundState::new(Side::Player);
        for pos in Position::CORNERS {
            state.board.set(pos, Cell::Occupied(Side::Opponent));
        }
        assert!(!PieceCapInvariant::holds(&state));
    }
}
