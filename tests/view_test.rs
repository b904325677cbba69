//! Tests for the framework-independent view.

use tictactoe_travel::{GameEngine, GameView, Square};

fn played(cells: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for cell in cells {
        engine.play_move(*cell);
    }
    engine
}

#[test]
fn test_descending_reverses_moves_keeping_highlight() {
    let mut engine = played(&[4, 0, 8]);
    engine.jump_to(1).unwrap();
    engine.toggle_order();

    let view = GameView::from_engine(&engine);
    assert!(!view.ascending);
    assert_eq!(view.sort_label, "Descending");

    let steps: Vec<usize> = view.moves.iter().map(|e| e.step).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);

    let highlighted: Vec<usize> = view
        .moves
        .iter()
        .filter(|e| e.highlighted)
        .map(|e| e.step)
        .collect();
    assert_eq!(highlighted, vec![1]);
    assert_eq!(view.moves[2].description, "Go to move #1 (1,1)");
}

#[test]
fn test_view_shows_cursor_board_not_latest() {
    let mut engine = played(&[4, 0, 8]);
    engine.jump_to(1).unwrap();

    let view = GameView::from_engine(&engine);
    assert_eq!(view.cursor, 1);
    assert_eq!(view.cells.iter().filter(|c| **c != Square::Empty).count(), 1);
    assert_eq!(view.moves.len(), 4);
    assert_eq!(view.status, "Next player: O");
}

#[test]
fn test_view_serializes_to_json() {
    let mut engine = played(&[0, 3, 1, 4, 2]);
    engine.jump_to(5).unwrap();

    let json = serde_json::to_value(GameView::from_engine(&engine)).unwrap();
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["sort_label"], "Ascending");
    assert_eq!(json["moves"][5]["highlighted"], true);
    assert_eq!(json["moves"][0]["description"], "Go to game start");
}
