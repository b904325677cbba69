//! Application state and logic.

use crate::games::tictactoe::{GameEngine, Position};
use crate::view::GameView;
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys walk the move list.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// A user intent decoded from a key press or click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Move the board cursor by a column/row delta.
    MoveCursor {
        /// Column delta.
        dcol: isize,
        /// Row delta.
        drow: isize,
    },
    /// Play the cell under the board cursor.
    PlaceAtCursor,
    /// Play a specific cell (0-8).
    Place(usize),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Select the entry above in the move list.
    SelectPrevious,
    /// Select the entry below in the move list.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Flip the move list order.
    ToggleOrder,
    /// Start a fresh session.
    Restart,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    /// History step of the selected move-list entry.
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(ascending: bool) -> Self {
        Self {
            engine: GameEngine::with_order(ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step of the selected move-list entry.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// View of the engine for this frame.
    pub fn view(&self) -> GameView {
        GameView::from_engine(&self.engine)
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: UiCommand) {
        match command {
            UiCommand::MoveCursor { dcol, drow } => {
                self.cursor = self.cursor.offset(dcol, drow);
            }
            UiCommand::PlaceAtCursor => self.place(self.cursor.to_index()),
            UiCommand::Place(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.place(cell);
            }
            UiCommand::SwitchFocus => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.selected_step = self.engine.cursor();
                }
            }
            UiCommand::SelectPrevious => self.step_selection(-1),
            UiCommand::SelectNext => self.step_selection(1),
            UiCommand::JumpToSelected => {
                // The selection is kept within history, so this cannot fail.
                if let Err(e) = self.engine.jump_to(self.selected_step) {
                    debug!(error = %e, "Selection out of range");
                }
            }
            UiCommand::ToggleOrder => self.engine.toggle_order(),
            UiCommand::Restart => {
                self.engine.reset();
                self.selected_step = 0;
                self.focus = Focus::Board;
            }
            UiCommand::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, cell: usize) {
        let outcome = self.engine.play_move(cell);
        debug!(%outcome, "Board input handled");
        if outcome.is_played() {
            self.selected_step = self.engine.cursor();
        }
    }

    /// Moves the selection one entry up or down in display order.
    fn step_selection(&mut self, delta: isize) {
        let steps: Vec<usize> = self.view().moves.iter().map(|entry| entry.step).collect();
        let current = steps
            .iter()
            .position(|step| *step == self.selected_step)
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(steps.len().saturating_sub(1));
        if let Some(step) = steps.get(next) {
            self.selected_step = *step;
        }
    }
}
