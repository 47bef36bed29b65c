//! Exhaustive minimax search.
//!
//! Two mutually recursive evaluators walk the full game tree to every
//! terminal leaf. There is no pruning, no memoization, and no depth
//! limit: the tree is at most 9 plies deep, so the walk terminates
//! instantly. X maximizes utility, O minimizes it.

use tracing::instrument;

use crate::action::Move;
use crate::types::{Board, Player};

/// Returns the optimal move for the side to move, or `None` if the
/// board is terminal.
///
/// Moves are evaluated in row-major order and the first move achieving
/// the best value is kept, so equal-valued alternatives tie-break
/// deterministically.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Move> {
    if board.terminal() {
        return None;
    }

    let mover = board.player();
    let mut best: Option<(Move, i32)> = None;

    for mv in board.actions() {
        let next = board.result(mv).expect("enumerated moves are legal");
        let score = match mover {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };
        let improved = match best {
            None => true,
            Some((_, best_score)) => match mover {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improved {
            best = Some((mv, score));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Game-theoretic value of the position from X's perspective, assuming
/// both sides play optimally from here.
pub fn value(board: &Board) -> i32 {
    match board.player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Value of the position when X is to move: the maximum over all legal
/// moves of the opponent's best reply.
fn max_value(board: &Board) -> i32 {
    if board.terminal() {
        return board.utility();
    }
    let mut value = i32::MIN;
    for mv in board.actions() {
        let next = board.result(mv).expect("enumerated moves are legal");
        value = value.max(min_value(&next));
    }
    value
}

/// Value of the position when O is to move: the minimum over all legal
/// moves of the opponent's best reply.
fn min_value(board: &Board) -> i32 {
    if board.terminal() {
        return board.utility();
    }
    let mut value = i32::MAX;
    for mv in board.actions() {
        let next = board.result(mv).expect("enumerated moves are legal");
        value = value.min(max_value(&next));
    }
    value
}
