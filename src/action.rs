//! Move coordinates and the errors raised when applying them.

use serde::{Deserialize, Serialize};

use crate::types::GRID_SIZE;

/// A move: the coordinate where the side to move places its mark.
///
/// Both `row` and `col` are valid in `0..3`. The derived ordering is
/// row-major (row first, then column), so ordered collections of moves
/// iterate top-left to bottom-right. This makes tie-breaking in search
/// deterministic instead of depending on incidental iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Move {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Move {
    /// Creates a move at the given coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into the board's cell array.
    ///
    /// Only meaningful for in-bounds moves; callers validate first.
    pub(crate) fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error raised when a move cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the 3x3 grid.
    #[display("coordinate ({}, {}) is outside the {}x{} grid", row, col, GRID_SIZE, GRID_SIZE)]
    OutOfBounds {
        /// Offending row index.
        row: usize,
        /// Offending column index.
        col: usize,
    },

    /// The cell at the coordinate already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(Move),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_ordering() {
        let mut moves = vec![Move::new(2, 0), Move::new(0, 1), Move::new(0, 0), Move::new(1, 2)];
        moves.sort();
        assert_eq!(
            moves,
            vec![Move::new(0, 0), Move::new(0, 1), Move::new(1, 2), Move::new(2, 0)]
        );
    }

    #[test]
    fn test_error_display() {
        let err = MoveError::OutOfBounds { row: 3, col: 0 };
        assert_eq!(err.to_string(), "coordinate (3, 0) is outside the 3x3 grid");

        let err = MoveError::Occupied(Move::new(1, 1));
        assert_eq!(err.to_string(), "cell (1, 1) is already occupied");
    }
}
