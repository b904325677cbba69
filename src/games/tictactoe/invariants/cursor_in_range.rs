//! Cursor invariant: the displayed step exists.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= cursor < history.len()`, and a highlight, when set,
/// also points into history.
pub struct CursorInRangeInvariant;

impl Invariant<GameEngine> for CursorInRangeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let len = engine.history().len();
        engine.cursor() < len && engine.highlight().is_none_or(|step| step < len)
    }

    fn description() -> &'static str {
        "Cursor and highlight point into history"
    }
}
