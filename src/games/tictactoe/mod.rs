//! Tic-tac-toe with snapshot history and time travel.

mod action;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{GameAction, IgnoreReason, JumpError, MoveOutcome};
pub use engine::{GameEngine, GameStatus, MoveEntry};
pub use history::{History, Snapshot};
pub use position::{Coordinates, Position};
pub use rules::{WinningLine, winning_line};
pub use types::{Board, Player, Square};
