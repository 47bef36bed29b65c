//! Win detection for the 3x3 board.

use tracing::instrument;

use crate::types::{Board, Cell, GRID_SIZE, Player};

/// The 8 winning lines as row-major coordinates, in check order:
/// rows top to bottom, columns left to right, main diagonal, anti
/// diagonal. The first complete line wins; on a malformed board with
/// several complete lines this order is the tie-break policy.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player occupies a full line,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    let cell = |(row, col): (usize, usize)| board.cells()[row * GRID_SIZE + col];

    for [a, b, c] in LINES {
        let first = cell(a);
        if first != Cell::Empty && first == cell(b) && first == cell(c) {
            return match first {
                Cell::Occupied(player) => Some(player),
                Cell::Empty => None,
            };
        }
    }

    None
}
