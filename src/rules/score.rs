//! Terminal classification and scoring.

use super::draw::is_full;
use super::win::check_winner;
use crate::types::{Board, Player};

/// Checks if play has ended: a line is complete or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Returns the score of the board:
/// +1 if X has won, -1 if O has won, 0 otherwise.
///
/// Total function: safe to call on any board, but only meaningful as a
/// minimax game value on terminal boards.
pub fn score(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
