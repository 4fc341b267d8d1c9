//! Board positions for infinite tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A position on the board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        self.opposite_corner().is_some()
    }

    /// The corner diagonally across the board, for corners only.
    pub fn opposite_corner(self) -> Option<Position> {
        match self {
            Position::TopLeft => Some(Position::BottomRight),
            Position::TopRight => Some(Position::BottomLeft),
            Position::BottomLeft => Some(Position::TopRight),
            Position::BottomRight => Some(Position::TopLeft),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
            assert_eq!(pos.row(), i / 3);
            assert_eq!(pos.col(), i % 3);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_opposite_corners() {
        assert_eq!(Position::TopLeft.opposite_corner(), Some(Position::BottomRight));
        assert_eq!(Position::TopRight.opposite_corner(), Some(Position::BottomLeft));
        assert_eq!(Position::Center.opposite_corner(), None);
        assert_eq!(Position::CORNERS.iter().filter(|p| p.is_corner()).count(), 4);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Position::BottomRight.to_string(), "Bottom-right");
        assert_eq!(Position::Center.to_string(), Position::Center.label());
    }
}
