//! First-class action types for tic-tac-toe.
//!
//! Actions are the inputs a front end forwards into the engine. They are
//! plain data, so a session can be logged, scripted and replayed.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// An input to the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GameAction {
    /// Place the active player's mark on a cell (0-8).
    #[display("play {cell}")]
    Play {
        /// Row-major cell index.
        cell: usize,
    },
    /// Show an earlier snapshot.
    #[display("jump to {step}")]
    JumpTo {
        /// History index to display.
        step: usize,
    },
    /// Flip the move list between ascending and descending order.
    #[display("toggle order")]
    ToggleOrder,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winner.
    #[display("Game is already won")]
    GameOver,
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The cell index is not on the board.
    #[display("Cell {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
}

/// What happened to a `play_move` request.
///
/// Illegal moves are no-ops rather than errors; this only tells the caller
/// which of the two happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and a snapshot appended.
    #[display("{player} -> {position}")]
    Played {
        /// Player who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// State was left untouched.
    #[display("ignored: {_0}")]
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }
}

/// Error returned when jumping to a step that is not in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Step {step} is out of range (history has {len} snapshots)")]
pub struct JumpError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}
