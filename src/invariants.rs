//! First-class invariants for the board model.
//!
//! Invariants are logical properties that must hold for every board
//! reachable through legal play. They are checked with `debug_assert!`
//! after each mutation and serve as testable documentation of the
//! guarantees the rest of the crate relies on.

use strum::IntoEnumIterator;

use crate::rules::win::has_line;
use crate::types::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Players strictly alternate: X moves first, so X never trails and leads
/// by at most one mark.
///
/// This invariant is derived rather than enforced — the board carries no
/// turn counter, and `apply_move` always places the derived current
/// player's mark, so the property holds by construction.
pub struct AlternatingMarks;

impl Invariant<Board> for AlternatingMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x >= o && x - o <= 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// At most one player holds a complete line.
///
/// Play stops once a line is complete, so alternating legal play can never
/// produce a board where both players have won.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        Player::iter().filter(|&p| has_line(board, p)).count() <= 1
    }

    fn description() -> &'static str {
        "at most one player holds a complete line"
    }
}
