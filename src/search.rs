//! Exhaustive minimax search.
//!
//! [`best_move`] is the entry point; [`max_value`] and [`min_value`]
//! alternate to model adversarial turn-taking. Every candidate action is
//! simulated on a copy of the board, so sibling branches never observe each
//! other's mutations. There is no pruning and no memoization: the state
//! space is small enough for full enumeration, and each recursive call
//! strictly reduces the number of empty squares, so the walk terminates
//! after at most nine plies.

use tracing::instrument;

use crate::action::Action;
use crate::types::{Board, Player};

/// Score sentinel beyond any reachable value; true scores are confined
/// to {-1, 0, 1}.
const INF: i32 = 1000;

/// Computes the optimal action for the side to move.
///
/// Returns `None` if the board is terminal. Otherwise X maximizes and O
/// minimizes the subtree value; only a strict improvement replaces the
/// running best, so ties keep the earliest action in the board's row-major
/// enumeration order and the result is deterministic. On the empty board
/// that tie-break selects `(0, 0)`.
#[instrument]
pub fn best_move(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let mut best_action = None;

    match board.current_player() {
        // MAX player (X) seeks the greatest subtree value.
        Player::X => {
            let mut best_score = -INF;

            for action in board.legal_actions() {
                let mut next = *board;
                next.apply_move(action);

                let score = min_value(&next);
                if score > best_score {
                    best_score = score;
                    best_action = Some(action);
                }
            }
        }
        // MIN player (O) seeks the least subtree value.
        Player::O => {
            let mut best_score = INF;

            for action in board.legal_actions() {
                let mut next = *board;
                next.apply_move(action);

                let score = max_value(&next);
                if score < best_score {
                    best_score = score;
                    best_action = Some(action);
                }
            }
        }
    }

    best_action
}

/// Evaluates the maximum value achievable from this board, assuming X is
/// to move and both sides play perfectly.
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.score();
    }

    let mut best_score = -INF;

    for action in board.legal_actions() {
        let mut next = *board;
        next.apply_move(action);

        best_score = best_score.max(min_value(&next));
    }

    best_score
}

/// Evaluates the minimum value achievable from this board, assuming O is
/// to move and both sides play perfectly.
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.score();
    }

    let mut best_score = INF;

    for action in board.legal_actions() {
        let mut next = *board;
        next.apply_move(action);

        best_score = best_score.min(max_value(&next));
    }

    best_score
}
