//! Draw detection for the 3x3 board.

use tracing::instrument;

use crate::types::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&c| c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use crate::action::Move;
    use crate::types::Player;

    use super::super::win::winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().result(Move::new(1, 1)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        // X O X / O X X / O X O, played out move by move.
        let mut board = Board::new();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ] {
            board = board.result(Move::new(row, col)).expect("legal move");
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            board = board.result(Move::new(row, col)).expect("legal move");
        }
        assert_eq!(winner(&board), Some(Player::X));
        assert!(!is_draw(&board));
    }
}
