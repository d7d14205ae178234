//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::action::{Action, ActionSet, MoveError};
use crate::invariants::{AlternatingMarks, Invariant, SingleWinner};
use crate::rules;

/// Board dimension (3x3 tic-tac-toe).
pub const SIZE: u8 = 3;

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

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Error for board access outside the 3x3 grid.
///
/// Out-of-range coordinates are a caller bug, not a recoverable condition;
/// the error exists to fail fast instead of masking the bug with a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates reference a cell outside the board.
    #[display("Coordinates ({row}, {col}) are outside the 3x3 board")]
    OutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order (index = row * 3 + col). The board
/// is wholly value-typed: the search copies it on every hypothetical move,
/// so sibling branches never observe each other's mutations. Whose turn it
/// is derives from the square contents; there is no separate turn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

// ─────────────────────────────────────────────────────────────
//  Construction and access
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Resets every square to empty.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either coordinate is ≥ 3.
    pub fn cell(&self, row: u8, col: u8) -> Result<Square, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.squares[usize::from(row) * 3 + usize::from(col)])
    }

    /// Returns all squares as a row-major slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Square addressed by an action known to be in range.
    fn at(&self, action: Action) -> Square {
        self.squares[usize::from(action.row) * 3 + usize::from(action.col)]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Game mechanics
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Returns the set of legal actions: the coordinates of every empty
    /// square, in row-major scan order.
    pub fn legal_actions(&self) -> ActionSet {
        let mut actions = ActionSet::new();

        for row in 0..SIZE {
            for col in 0..SIZE {
                let action = Action::new(row, col);
                if self.at(action) == Square::Empty {
                    actions.insert(action);
                }
            }
        }

        actions
    }

    /// Applies a move if it is legal; illegal moves are silently ignored.
    ///
    /// The legality check before mutation is the board's only defense:
    /// callers are expected to pass actions drawn from [`legal_actions`]
    /// (see [`try_move`] for the error-surfacing variant). The mark placed
    /// is always [`current_player`]'s, so alternation cannot be violated.
    ///
    /// [`legal_actions`]: Board::legal_actions
    /// [`try_move`]: Board::try_move
    /// [`current_player`]: Board::current_player
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, action: Action) {
        if !self.legal_actions().contains(action) {
            return;
        }

        let player = self.current_player();
        self.squares[usize::from(action.row) * 3 + usize::from(action.col)] =
            Square::Occupied(player);

        self.assert_invariants();
    }

    /// Checked variant of [`apply_move`] that surfaces illegal moves.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates ≥ 3 and
    /// [`MoveError::SquareOccupied`] when the target square holds a mark.
    ///
    /// [`apply_move`]: Board::apply_move
    #[instrument(skip(self))]
    pub fn try_move(&mut self, action: Action) -> Result<(), MoveError> {
        if action.row >= SIZE || action.col >= SIZE {
            return Err(MoveError::OutOfRange(action));
        }
        if self.at(action) != Square::Empty {
            return Err(MoveError::SquareOccupied(action));
        }

        let player = self.current_player();
        self.squares[usize::from(action.row) * 3 + usize::from(action.col)] =
            Square::Occupied(player);

        self.assert_invariants();
        Ok(())
    }

    fn assert_invariants(&self) {
        debug_assert!(
            AlternatingMarks::holds(self),
            "{}",
            AlternatingMarks::description()
        );
        debug_assert!(SingleWinner::holds(self), "{}", SingleWinner::description());
    }
}

// ─────────────────────────────────────────────────────────────
//  Game evaluation
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Returns true if the board is in the initial (empty) state.
    pub fn is_initial(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Counts how many squares the given player occupies.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the player who has the next turn.
    ///
    /// X moves first, so X is to move whenever the mark counts are equal.
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Returns the winner, if either player holds a complete line.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns true if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true if play has ended: a line is complete or the board is full.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Minimax score of the board: +1 if X has won, -1 if O has won, 0
    /// otherwise. Total; meaningful as a game value only on terminal boards.
    pub fn score(&self) -> i32 {
        rules::score(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}
