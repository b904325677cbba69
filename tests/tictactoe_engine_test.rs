//! Tests for the time-travel engine.

use tictactoe_travel::{
    Board, GameEngine, GameStatus, IgnoreReason, MoveOutcome, Player, Position, Square,
    winning_line,
};

fn board_from(marks: [Option<Player>; 9]) -> Board {
    Board::from_squares(marks.map(|m| m.map_or(Square::Empty, Square::Occupied)))
}

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

#[test]
fn test_history_len_tracks_cursor_after_each_move() {
    let mut engine = GameEngine::new();
    for cell in [4, 0, 8, 2, 6] {
        assert!(engine.play_move(cell).is_played());
        assert_eq!(engine.history().len(), engine.cursor() + 1);
    }
}

#[test]
fn test_first_snapshot_stays_empty() {
    let mut engine = GameEngine::new();
    engine.play_move(0);
    engine.play_move(4);
    engine.jump_to(0).unwrap();
    engine.play_move(8);
    assert_eq!(engine.history().snapshots()[0], Board::new());
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut engine = GameEngine::new();
    engine.play_move(4);
    engine.play_move(0);
    let history = engine.history().clone();

    assert_eq!(
        engine.play_move(0),
        MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(engine.history(), &history);
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_jump_then_play_truncates_and_branches() {
    let mut engine = GameEngine::new();
    for cell in [4, 0, 8, 2] {
        engine.play_move(cell);
    }
    let original = engine.history().clone();

    let k = 2;
    engine.jump_to(k).unwrap();
    assert!(engine.play_move(6).is_played());

    assert_eq!(engine.history().len(), k + 2);
    assert_eq!(
        &engine.history().snapshots()[..=k],
        &original.snapshots()[..=k]
    );
}

#[test]
fn test_winning_line_row_and_column() {
    let row = board_from([X, X, X, E, E, E, E, E, E]);
    assert_eq!(winning_line(&row).map(|l| l.indices()), Some([0, 1, 2]));

    let col = board_from([X, E, E, X, E, E, X, E, E]);
    assert_eq!(winning_line(&col).map(|l| l.indices()), Some([0, 3, 6]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from([X, O, X, X, X, O, O, X, O]);
    assert_eq!(winning_line(&board), None);

    // Reach the same position through play: X0 O1 X2 O5 X3 O6 X4 O8 X7
    let mut engine = GameEngine::new();
    for cell in [0, 1, 2, 5, 3, 6, 4, 8, 7] {
        assert!(engine.play_move(cell).is_played());
    }
    assert_eq!(engine.current_board(), &board);
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.status().to_string(), "Draw");
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_move_description_uses_col_row() {
    let mut engine = GameEngine::new();
    engine.play_move(4);
    assert_eq!(
        engine.move_description(1).as_deref(),
        Some("Go to move #1 (1,1)")
    );
    assert_eq!(engine.move_description(0).as_deref(), Some("Go to game start"));
}

#[test]
fn test_turn_parity() {
    let mut engine = GameEngine::new();
    for (played, cell) in [4, 0, 8, 2].into_iter().enumerate() {
        let expected = if played % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(engine.next_player(), expected);
        assert_eq!(engine.status(), GameStatus::NextPlayer(expected));
        engine.play_move(cell);
    }
}

#[test]
fn test_winner_reported_from_first_cell() {
    let mut engine = GameEngine::new();
    // O completes the anti-diagonal: X0 O2 X1 O4 X8 O6
    for cell in [0, 2, 1, 4, 8, 6] {
        engine.play_move(cell);
    }
    assert_eq!(engine.status().to_string(), "Winner: O");
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([2, 4, 6]));

    // Reviewing history stays possible after the win.
    engine.jump_to(3).unwrap();
    assert_eq!(engine.status().to_string(), "Next player: O");
    assert_eq!(engine.history().len(), 7);
}
