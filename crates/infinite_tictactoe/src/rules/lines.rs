//! The eight winning lines and line-counting helpers.

use super::super::{Board, Cell, Position, Side};

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// If `side` holds exactly two cells of `line` and the third is empty,
/// returns the empty cell.
pub fn completing_cell(board: &Board, line: &Line, side: Side) -> Option<Position> {
    let mut own = 0;
    let mut empty = None;
    for &pos in line {
        match board.get(pos) {
            Cell::Occupied(s) if s == side => own += 1,
            Cell::Empty if empty.is_none() => empty = Some(pos),
            _ => return None,
        }
    }
    if own == 2 { empty } else { None }
}

/// Number of lines `side` could complete with one more piece.
pub fn threat_count(board: &Board, side: Side) -> usize {
    LINES
        .iter()
        .filter(|line| completing_cell(board, line, side).is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completing_cell() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Side::Player));
        board.set(Position::TopCenter, Cell::Occupied(Side::Player));

        assert_eq!(completing_cell(&board, &LINES[0], Side::Player), Some(Position::TopRight));
        assert_eq!(completing_cell(&board, &LINES[0], Side::Opponent), None);

        board.set(Position::TopRight, Cell::Occupied(Side::Opponent));
        assert_eq!(completing_cell(&board, &LINES[0], Side::Player), None);
    }

    #[test]
    fn test_threat_count() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Side::Opponent));
        board.set(Position::Center, Cell::Occupied(Side::Opponent));
        board.set(Position::TopRight, Cell::Occupied(Side::Opponent));
        // Lines 0-1-2 (needs 1), 0-4-8 (needs 8), 2-4-6 (needs 6)
        assert_eq!(threat_count(&board, Side::Opponent), 3);
        assert_eq!(threat_count(&board, Side::Player), 0);
    }
}
