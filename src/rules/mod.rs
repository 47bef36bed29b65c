//! Outcome rules: win lines, draw detection, terminal test, and utility.

mod draw;
mod win;

use crate::types::{Board, Outcome, Player};

/// Checks whether the game is over: someone has won or the board is full.
pub fn terminal(board: &Board) -> bool {
    win::winner(board).is_some() || draw::is_full(board)
}

/// Game-theoretic score of a position from X's perspective.
///
/// Returns 1 if X has won, -1 if O has won, 0 otherwise. Only meaningful
/// on terminal boards; a non-terminal board also scores 0.
pub fn utility(board: &Board) -> i32 {
    match win::winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies a position as in progress, won, or drawn.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = win::winner(board) {
        Outcome::Won(player)
    } else if draw::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

// Rule queries exposed as board methods.
impl Board {
    /// Returns the winner of the position, if any.
    pub fn winner(&self) -> Option<Player> {
        win::winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        draw::is_full(self)
    }

    /// Checks whether the game is over.
    pub fn terminal(&self) -> bool {
        terminal(self)
    }

    /// Game-theoretic score of the position from X's perspective.
    ///
    /// See [`utility`].
    pub fn utility(&self) -> i32 {
        utility(self)
    }

    /// Classifies the position as in progress, won, or drawn.
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }
}
