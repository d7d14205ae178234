//! Tests for the board model and game rules.

use tictactoe_minimax::{Action, Board, BoardError, MoveError, Player, Square};

/// Plays a sequence of actions from the empty board.
fn play(actions: &[Action]) -> Board {
    let mut board = Board::new();
    for &action in actions {
        board.apply_move(action);
    }
    board
}

#[test]
fn test_legal_actions_are_exactly_the_empty_squares() {
    let board = play(&[Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)]);

    let legal = board.legal_actions();
    assert_eq!(legal.len(), 6);

    for row in 0..3 {
        for col in 0..3 {
            let empty = board.cell(row, col).expect("in range") == Square::Empty;
            assert_eq!(legal.contains(Action::new(row, col)), empty);
        }
    }
}

#[test]
fn test_legal_actions_size_tracks_marks() {
    let mut board = Board::new();
    assert_eq!(board.legal_actions().len(), 9);

    let moves = [
        Action::new(1, 1),
        Action::new(0, 0),
        Action::new(0, 2),
        Action::new(2, 0),
    ];
    for (played, &action) in moves.iter().enumerate() {
        board.apply_move(action);
        assert_eq!(board.legal_actions().len(), 9 - (played + 1));
    }
}

#[test]
fn test_mark_counts_stay_balanced() {
    let mut board = Board::new();
    let moves = [
        Action::new(1, 1),
        Action::new(0, 0),
        Action::new(2, 2),
        Action::new(0, 2),
        Action::new(0, 1),
        Action::new(2, 1),
    ];

    for &action in &moves {
        let expected = if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        };
        assert_eq!(board.current_player(), expected);

        board.apply_move(action);
        let diff = board.count(Player::X) - board.count(Player::O);
        assert!(diff == 0 || diff == 1);
    }
}

#[test]
fn test_winner_requires_three_marks() {
    let board = play(&[Action::new(0, 0), Action::new(1, 0), Action::new(0, 1)]);
    // X holds two marks, O one: no winner possible yet.
    assert_eq!(board.winner(), None);
}

#[test]
fn test_apply_move_is_idempotent() {
    let mut board = Board::new();
    board.apply_move(Action::new(1, 1));
    let once = board;

    board.apply_move(Action::new(1, 1));
    assert_eq!(board, once);
}

#[test]
fn test_terminal_iff_winner_or_full() {
    // Ongoing board: neither winner nor full.
    let ongoing = play(&[Action::new(0, 0), Action::new(1, 1)]);
    assert!(!ongoing.is_terminal());

    // Won board: winner, not full.
    let won = play(&[
        Action::new(0, 0),
        Action::new(1, 0),
        Action::new(0, 1),
        Action::new(1, 1),
        Action::new(0, 2),
    ]);
    assert_eq!(won.winner(), Some(Player::X));
    assert!(!won.is_full());
    assert!(won.is_terminal());

    // Drawn board: full, no winner.
    let drawn = play(&[
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 1),
        Action::new(1, 0),
        Action::new(1, 2),
        Action::new(2, 1),
        Action::new(2, 0),
        Action::new(2, 2),
    ]);
    assert_eq!(drawn.winner(), None);
    assert!(drawn.is_full());
    assert!(drawn.is_terminal());
    assert_eq!(drawn.score(), 0);
}

#[test]
fn test_boards_compare_by_contents_not_history() {
    // Same final position reached through different move orders.
    let first = play(&[
        Action::new(0, 0),
        Action::new(2, 2),
        Action::new(0, 1),
        Action::new(2, 1),
    ]);
    let second = play(&[
        Action::new(0, 1),
        Action::new(2, 1),
        Action::new(0, 0),
        Action::new(2, 2),
    ]);

    assert_eq!(first, second);
}

#[test]
fn test_cell_access_fails_fast_out_of_range() {
    let board = Board::new();
    assert!(matches!(
        board.cell(4, 4),
        Err(BoardError::OutOfRange { row: 4, col: 4 })
    ));
}

#[test]
fn test_checked_move_surfaces_illegal_moves() {
    let mut board = Board::new();
    board.try_move(Action::new(0, 0)).expect("legal move");

    let occupied = board.try_move(Action::new(0, 0));
    assert_eq!(
        occupied,
        Err(MoveError::SquareOccupied(Action::new(0, 0)))
    );

    let out_of_range = board.try_move(Action::new(9, 0));
    assert_eq!(out_of_range, Err(MoveError::OutOfRange(Action::new(9, 0))));
}

#[test]
fn test_clear_returns_to_initial_state() {
    let mut board = play(&[Action::new(0, 0), Action::new(1, 1)]);
    assert!(!board.is_initial());

    board.clear();
    assert!(board.is_initial());
    assert_eq!(board.legal_actions().len(), 9);
}

#[test]
fn test_board_serde_round_trip() {
    let board = play(&[Action::new(1, 1), Action::new(0, 2)]);

    let json = serde_json::to_string(&board).expect("serialize board");
    let restored: Board = serde_json::from_str(&json).expect("deserialize board");
    assert_eq!(board, restored);
}

#[test]
fn test_action_serde_round_trip() {
    let action = Action::new(2, 1);

    let json = serde_json::to_string(&action).expect("serialize action");
    let restored: Action = serde_json::from_str(&json).expect("deserialize action");
    assert_eq!(action, restored);
}
