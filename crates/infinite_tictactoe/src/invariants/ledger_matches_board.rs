//! Ledger consistency: every live piece has exactly one ledger record.

use super::super::{Board, Cell, RoundState};
use super::Invariant;

/// Invariant: rebuilding the board from the ledger gives the actual board.
///
/// Each record sits on a distinct cell and no piece is on the board without
/// a record, so per side the record count equals the live piece count.
pub struct LedgerMatchesBoardInvariant;

impl Invariant<RoundState> for LedgerMatchesBoardInvariant {
    fn holds(state: &RoundState) -> bool {
        let mut rebuilt = Board::new();

        for record in state.ledger().records() {
            if !rebuilt.is_empty(record.position) {
                return false;
            }
            rebuilt.set(record.position, Cell::Occupied(record.side));
        }

        rebuilt == *state.board()
    }

    fn description() -> &'static str {
        "Ledger records match the pieces on the board"
    }
}
