//! Perfect-play tic-tac-toe engine.
//!
//! This library pairs a value-typed board model with an exhaustive minimax
//! search. Given any legal 3x3 position it classifies the game as ongoing,
//! won, or drawn, and computes the game-theoretically optimal move for the
//! side to act.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`] - the state model; turn
//!   order derives from the square contents rather than a counter
//! - **Actions**: [`Action`] and the fixed-capacity [`ActionSet`] used to
//!   enumerate candidate moves
//! - **Rules**: pure evaluation functions - win, draw, terminal, score
//! - **Search**: [`best_move`] with the mutually recursive [`max_value`] /
//!   [`min_value`] pair
//!
//! The engine has no UI, persistence, or driver logic of its own; a caller
//! constructs a [`Board`], advances it with [`Board::apply_move`], and asks
//! [`best_move`] for the engine's recommendation.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{best_move, Action, Board};
//!
//! let mut board = Board::new();
//! // Perfect play from the empty board is a draw; the row-major tie-break
//! // makes the opening recommendation deterministic.
//! let opening = best_move(&board).expect("empty board has legal moves");
//! assert_eq!(opening, Action::new(0, 0));
//!
//! board.apply_move(opening);
//! assert!(!board.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - actions
pub use action::{Action, ActionSet, IntoIter, MoveError, MAX_ACTIONS};

// Crate-level exports - invariants
pub use invariants::{AlternatingMarks, Invariant, SingleWinner};

// Crate-level exports - rules
pub use rules::{check_winner, is_draw, is_full, is_terminal, score};

// Crate-level exports - search
pub use search::{best_move, max_value, min_value};

// Crate-level exports - board model
pub use types::{Board, BoardError, Player, Square, SIZE};
