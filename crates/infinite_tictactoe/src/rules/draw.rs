//! Draw detection logic.
//!
//! A draw is a full board with no winning line. With [`PIECE_CAP`] pieces per
//! side at most six of the nine cells are ever occupied, so under the capped
//! rules `is_draw` never holds on a reachable board. It stays a real check
//! rather than a hard-coded `false` so that the law keeps depending on the
//! cap and the board size.
//!
//! [`PIECE_CAP`]: super::super::PIECE_CAP

use super::super::{Board, Cell};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Full board without a winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
