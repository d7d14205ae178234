//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::types::{Board, Player, Square};

/// The eight winning lines as row-major square indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Scans all eight lines and returns `Some(player)` for the first line held
/// entirely by one player, `None` otherwise. On boards reachable through
/// alternating play at most one player can hold a line, so scan order does
/// not affect the result.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Checks whether the given player holds at least one complete line.
pub(crate) fn has_line(board: &Board, player: Player) -> bool {
    let squares = board.squares();

    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
}
