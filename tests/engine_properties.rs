//! Property tests for history and cursor invariants.

use proptest::prelude::*;
use tictactoe_travel::invariants::{EngineInvariants, InvariantSet};
use tictactoe_travel::{Board, GameAction, GameEngine, GameStatus, Player};

/// Random mix of plays (including off-board cells), jumps and toggles.
fn arb_action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        6 => (0usize..10).prop_map(|cell| GameAction::Play { cell }),
        2 => (0usize..10).prop_map(|step| GameAction::JumpTo { step }),
        1 => Just(GameAction::ToggleOrder),
    ]
}

proptest! {
    /// Invariants hold after any action sequence; failed jumps change nothing.
    #[test]
    fn prop_invariants_hold(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut engine = GameEngine::new();
        for action in actions {
            let before = engine.clone();
            match engine.apply(action) {
                Ok(Some(outcome)) if outcome.is_played() => {
                    prop_assert_eq!(engine.history().len(), engine.cursor() + 1);
                    prop_assert_eq!(engine.highlight(), None);
                }
                Ok(Some(_)) | Err(_) => {
                    prop_assert_eq!(engine.history(), before.history());
                    prop_assert_eq!(engine.cursor(), before.cursor());
                    prop_assert_eq!(engine.highlight(), before.highlight());
                }
                Ok(None) => {}
            }
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
            prop_assert_eq!(&engine.history().snapshots()[0], &Board::new());
        }
    }

    /// Snapshot n holds n marks and the player on turn follows parity.
    #[test]
    fn prop_parity_and_mark_count(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut engine = GameEngine::new();
        for action in actions {
            let _ = engine.apply(action);
        }
        for (step, board) in engine.history().snapshots().iter().enumerate() {
            prop_assert_eq!(board.occupied_count(), step);
        }
        let expected = if engine.cursor() % 2 == 0 { Player::X } else { Player::O };
        prop_assert_eq!(engine.next_player(), expected);
    }

    /// A status is never both a win and a draw, and descriptions exist for every step.
    #[test]
    fn prop_status_and_descriptions(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut engine = GameEngine::new();
        for action in actions {
            let _ = engine.apply(action);
        }
        match engine.status() {
            GameStatus::Winner(player) => {
                let line = engine.winning_line();
                prop_assert_eq!(line.map(|l| l.player()), Some(player));
            }
            GameStatus::Draw => {
                prop_assert!(engine.winning_line().is_none());
                prop_assert_eq!(engine.current_board().occupied_count(), 9);
            }
            GameStatus::NextPlayer(_) => {
                prop_assert!(engine.winning_line().is_none());
                prop_assert!(engine.current_board().occupied_count() < 9);
            }
        }
        let list = engine.move_list();
        prop_assert_eq!(list.len(), engine.history().len());
        prop_assert!(list.iter().filter(|e| e.highlighted).count() <= 1);
    }
}

#[test]
fn test_branching_discards_future() {
    let mut engine = GameEngine::new();
    for cell in [0, 1, 2, 3] {
        engine.play_move(cell);
    }
    engine.jump_to(1).unwrap();
    engine.play_move(8);
    assert_eq!(engine.history().len(), 3);
    assert!(EngineInvariants::check_all(&engine).is_ok());
}
