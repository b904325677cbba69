//! Empty start invariant: history always opens on a blank board.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: The first snapshot is the empty board.
///
/// Branching truncates after the cursor, never before it, so the
/// starting board survives every transition.
pub struct EmptyStartInvariant;

impl Invariant<GameEngine> for EmptyStartInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "First snapshot is the empty board"
    }
}
