//! Framework-independent view of the engine.
//!
//! A front end renders a `GameView` and never reads engine internals, so
//! the terminal UI and the headless `replay` output share one description.

use crate::games::tictactoe::{GameEngine, MoveEntry, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Squares of the displayed board, row-major.
    pub cells: [Square; 9],
    /// `Winner: X`, `Draw` or `Next player: O`.
    pub status: String,
    /// Cell indices of the complete line, for highlighting.
    pub winning_line: Option<[usize; 3]>,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Whether `moves` reads oldest first.
    pub ascending: bool,
    /// Label of the order toggle.
    pub sort_label: &'static str,
    /// Index of the displayed snapshot.
    pub cursor: usize,
}

impl GameView {
    /// Builds the view of the engine's displayed snapshot.
    ///
    /// In descending order the move list is reversed; each entry keeps its
    /// own `step` and `highlighted` flag.
    #[instrument(skip(engine), fields(cursor = engine.cursor()))]
    pub fn from_engine(engine: &GameEngine) -> Self {
        let mut moves = engine.move_list();
        if !engine.is_ascending() {
            moves.reverse();
        }

        Self {
            cells: *engine.current_board().squares(),
            status: engine.status().to_string(),
            winning_line: engine.winning_line().map(|line| line.indices()),
            moves,
            ascending: engine.is_ascending(),
            sort_label: if engine.is_ascending() {
                "Ascending"
            } else {
                "Descending"
            },
            cursor: engine.cursor(),
        }
    }

    /// Whether the cell at `pos` belongs to the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos.to_index()))
    }

    /// Plain-text rendering: board, status, sort label, move list.
    ///
    /// Winning cells are bracketed and the highlighted entry is starred.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (row, chunk) in Position::ALL.chunks(3).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .map(|pos| {
                    let symbol = self.cells[pos.to_index()].symbol();
                    if self.is_winning_cell(*pos) {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }

        out.push('\n');
        out.push_str(&self.status);
        out.push('\n');
        out.push_str(&format!("Order: {}\n", self.sort_label));
        for entry in &self.moves {
            let marker = if entry.highlighted { '*' } else { ' ' };
            out.push_str(&format!("{marker} {}\n", entry.description));
        }
        out
    }
}
