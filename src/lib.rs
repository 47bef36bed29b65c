//! Optimal tic-tac-toe play via exhaustive minimax search.
//!
//! The crate models the 3x3 board as an immutable value: applying a move
//! produces a new [`Board`] and never touches the input. On top of the
//! board sit turn inference, legal-move enumeration, win/draw detection,
//! and a full-depth minimax search with no pruning. The state space is
//! small enough that exhaustive search terminates instantly.
//!
//! # Example
//!
//! ```
//! use tictactoe_oracle::{minimax, Board, Player};
//!
//! let board = Board::new();
//! assert_eq!(board.player(), Player::X);
//!
//! let opening = minimax(&board).expect("empty board is not terminal");
//! assert!(board.actions().contains(&opening));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use search::{minimax, value};
pub use types::{Board, Cell, GRID_SIZE, Outcome, Player};
