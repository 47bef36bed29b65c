//! Core domain types: players, cells, and the board value.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::action::{Move, MoveError};

/// Width and height of the board.
pub const GRID_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Single-character rendering: `.`, `X`, or `O`.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a cell from its character rendering.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board, row-major.
///
/// Boards are plain values: every transformation returns a new board and
/// leaves the input untouched, so search branches can never corrupt each
/// other through shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board, the starting position.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from raw cells in row-major order.
    ///
    /// No legality check is performed; rule queries such as
    /// [`Board::winner`](crate::Board::winner) accept positions that
    /// could never arise in play.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(self.cells[row * GRID_SIZE + col])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks whether the cell at the move's coordinate is empty.
    ///
    /// Out-of-bounds coordinates are not empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv.row, mv.col), Some(Cell::Empty))
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves first, and the sides alternate, so the side to move
    /// follows from the parity of the empty-cell count: odd means X
    /// (including the starting board's nine), even means O. Defined for
    /// every board, terminal ones included.
    pub fn player(&self) -> Player {
        let empty = self.cells.iter().filter(|c| **c == Cell::Empty).count();
        if empty % 2 == 0 { Player::O } else { Player::X }
    }

    /// Returns the set of legal moves: every empty coordinate.
    ///
    /// The set is empty exactly when the board is full. `BTreeSet`
    /// iterates moves in row-major order, which downstream search relies
    /// on for reproducible tie-breaking.
    pub fn actions(&self) -> BTreeSet<Move> {
        let mut moves = BTreeSet::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let mv = Move::new(row, col);
                if self.cells[mv.index()] == Cell::Empty {
                    moves.insert(mv);
                }
            }
        }
        moves
    }

    /// Returns the board that results from the side to move playing `mv`.
    ///
    /// The input board is unchanged; the mark placed belongs to
    /// [`Board::player`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either index is `>= 3`. The bound
    ///   check is a strict `>=` against the grid size so that an index
    ///   exactly equal to the dimension is rejected here rather than
    ///   masked by the occupancy check.
    /// - [`MoveError::Occupied`] if the target cell already holds a mark.
    #[instrument(skip(self), fields(mover = %self.player()))]
    pub fn result(&self, mv: Move) -> Result<Board, MoveError> {
        if mv.row >= GRID_SIZE || mv.col >= GRID_SIZE {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.cells[mv.index()] != Cell::Empty {
            return Err(MoveError::Occupied(mv));
        }

        let mut next = *self;
        next.cells[mv.index()] = Cell::Occupied(self.player());
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                write!(f, "{}", self.cells[row * GRID_SIZE + col].to_char())?;
                if col < GRID_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < GRID_SIZE - 1 {
                writeln!(f, "\n-+-+-")?;
            }
        }
        Ok(())
    }
}

/// Result classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty cell remains.
    InProgress,
    /// The given player completed a line.
    Won(Player),
    /// The board is full with no winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_initial_board_is_empty_and_x_to_move() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.player(), Player::X);
    }

    #[test]
    fn test_turn_alternates_by_empty_cell_parity() {
        let board = Board::new();
        let board = board.result(Move::new(1, 1)).unwrap();
        assert_eq!(board.player(), Player::O);
        let board = board.result(Move::new(0, 0)).unwrap();
        assert_eq!(board.player(), Player::X);
    }

    #[test]
    fn test_actions_lists_every_empty_cell() {
        let board = Board::new().result(Move::new(0, 0)).unwrap();
        let actions = board.actions();
        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&Move::new(0, 0)));
        for mv in &actions {
            assert!(board.is_empty(*mv));
        }
    }

    #[test]
    fn test_result_leaves_input_unchanged() {
        let board = Board::new();
        let next = board.result(Move::new(2, 2)).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(2, 2), Some(Cell::Occupied(Player::X)));
        // Only the played coordinate differs.
        let changed = board
            .cells()
            .iter()
            .zip(next.cells().iter())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_result_rejects_index_equal_to_grid_size() {
        let board = Board::new();
        assert_eq!(
            board.result(Move::new(3, 0)),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.result(Move::new(0, 3)),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_result_rejects_occupied_cell() {
        let board = Board::new().result(Move::new(1, 1)).unwrap();
        assert_eq!(
            board.result(Move::new(1, 1)),
            Err(MoveError::Occupied(Move::new(1, 1)))
        );
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::new()
            .result(Move::new(0, 0))
            .unwrap()
            .result(Move::new(1, 1))
            .unwrap();
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
