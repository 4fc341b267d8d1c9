//! Win detection logic.

use super::super::{Board, Cell, Side};
use super::lines::{LINES, Line};
use tracing::instrument;

/// Returns the first line (in [`LINES`] order) filled entirely by `side`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, side: Side) -> Option<Line> {
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == Cell::Occupied(side)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(side)` if a side has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Side> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.side();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Side::Player));
        board.set(Position::TopCenter, Cell::Occupied(Side::Player));
        board.set(Position::TopRight, Cell::Occupied(Side::Player));
        assert_eq!(check_winner(&board), Some(Side::Player));
        assert_eq!(
            winning_line(&board, Side::Player),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(winning_line(&board, Side::Opponent), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Side::Opponent));
        board.set(Position::Center, Cell::Occupied(Side::Opponent));
        board.set(Position::BottomLeft, Cell::Occupied(Side::Opponent));
        assert_eq!(check_winner(&board), Some(Side::Opponent));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Side::Player));
        board.set(Position::TopCenter, Cell::Occupied(Side::Player));
        board.set(Position::TopRight, Cell::Occupied(Side::Opponent));
        assert_eq!(check_winner(&board), None);
    }
}
