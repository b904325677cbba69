//! Tic-tac-toe with move history and time travel.
//!
//! The engine keeps every board snapshot played so far. Any earlier
//! snapshot can be displayed again, and playing from it discards the
//! moves that followed.
//!
//! # Architecture
//!
//! - **Engine**: snapshot history, cursor, win/draw evaluation
//! - **View**: a framework-independent description of one frame
//! - **TUI**: ratatui front end that renders the view
//! - **Script**: compact action scripts for headless replay
//!
//! # Example
//!
//! ```
//! use tictactoe_travel::{GameEngine, GameView};
//!
//! let mut engine = GameEngine::new();
//! engine.play_move(4);
//! engine.play_move(0);
//! engine.jump_to(1).unwrap();
//!
//! let view = GameView::from_engine(&engine);
//! assert_eq!(view.status, "Next player: O");
//! assert_eq!(view.moves[1].description, "Go to move #1 (1,1)");
//! assert!(view.moves[1].highlighted);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod games;
mod script;
pub mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigSource, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Scripted replay
pub use script::{ScriptError, parse_script, run_script};

// Crate-level exports - View
pub use view::GameView;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Coordinates, GameAction, GameEngine, GameStatus, History, IgnoreReason, JumpError,
    MoveEntry, MoveOutcome, Player, Position, Snapshot, Square, WinningLine, invariants, rules,
    winning_line,
};
