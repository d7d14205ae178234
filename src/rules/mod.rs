//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be tested and composed independently.

pub mod draw;
pub mod score;
pub mod win;

pub use draw::{is_draw, is_full};
pub use score::{is_terminal, score};
pub use win::check_winner;
