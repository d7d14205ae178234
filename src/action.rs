//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. An [`Action`] names a board
//! coordinate; the [`ActionSet`] is the fixed-capacity collection the board
//! hands to the search for candidate enumeration.

use serde::{Deserialize, Serialize};

/// Maximum number of distinct actions on a 3x3 board.
pub const MAX_ACTIONS: usize = 9;

/// A move in tic-tac-toe: placing the current player's mark at a coordinate.
///
/// Two actions are equal iff their coordinates match. "No legal move" is
/// expressed as `Option<Action>::None` at API boundaries rather than a
/// sentinel coordinate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row index in [0, 3).
    pub row: u8,
    /// Column index in [0, 3).
    pub col: u8,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move through the checked API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the action's coordinate is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Action),

    /// The action's coordinates fall outside the 3x3 board.
    #[display("Action {_0} is outside the 3x3 board")]
    OutOfRange(Action),
}

impl std::error::Error for MoveError {}

// ─────────────────────────────────────────────────────────────
//  ActionSet
// ─────────────────────────────────────────────────────────────

/// A fixed-capacity set of unique actions.
///
/// Intentionally minimal: built once by [`Board::legal_actions`], read by
/// the search, never persisted. Storage is an inline array since at most
/// nine empty squares exist, so no allocation ever happens. Iteration
/// yields insertion order, which for `legal_actions` is the board's
/// row-major scan order — the documented minimax tie-break.
///
/// [`Board::legal_actions`]: crate::Board::legal_actions
#[derive(Debug, Clone, Copy)]
pub struct ActionSet {
    /// Storage for actions; only the first `len` entries are live.
    actions: [Action; MAX_ACTIONS],
    /// Number of stored actions.
    len: usize,
}

impl ActionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            actions: [Action::default(); MAX_ACTIONS],
            len: 0,
        }
    }

    /// Checks whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of stored actions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether an action is contained in the set (linear scan).
    pub fn contains(&self, action: Action) -> bool {
        self.actions[..self.len].contains(&action)
    }

    /// Inserts an action if it is not already present.
    ///
    /// Inserts beyond capacity are silently dropped; that cannot occur for
    /// this domain since only nine distinct coordinates exist.
    pub fn insert(&mut self, action: Action) {
        if !self.contains(action) && self.len < MAX_ACTIONS {
            self.actions[self.len] = action;
            self.len += 1;
        }
    }

    /// Iterates over the stored actions in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Action>> {
        self.actions[..self.len].iter().copied()
    }
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Owning iterator over an [`ActionSet`].
#[derive(Debug, Clone)]
pub struct IntoIter {
    actions: [Action; MAX_ACTIONS],
    len: usize,
    next: usize,
}

impl Iterator for IntoIter {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        if self.next < self.len {
            let action = self.actions[self.next];
            self.next += 1;
            Some(action)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for ActionSet {
    type Item = Action;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            actions: self.actions,
            len: self.len,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a ActionSet {
    type Item = Action;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Action>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
