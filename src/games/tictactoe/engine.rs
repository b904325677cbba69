//! Game state engine: snapshot history, cursor and move list.

use super::action::{GameAction, IgnoreReason, JumpError, MoveOutcome};
use super::history::History;
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{self, WinningLine};
use super::types::{Board, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What the displayed board says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete; the player owns it.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every cell is occupied and no line is complete.
    #[display("Draw")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// Whether the displayed board accepts no further moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// `Go to game start` or `Go to move #n (col,row)`.
    pub description: String,
    /// Whether this is the emphasized entry.
    pub highlighted: bool,
}

/// Tic-tac-toe engine with time travel.
///
/// Holds every snapshot played so far and which one is displayed. The
/// player to move is derived from the cursor: X on even steps, O on odd.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) highlight: Option<usize>,
    pub(crate) ascending: bool,
}

impl GameEngine {
    /// Creates a new game showing the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            highlight: None,
            ascending: true,
        }
    }

    /// Creates a new game with the given move list order.
    pub fn with_order(ascending: bool) -> Self {
        Self {
            ascending,
            ..Self::new()
        }
    }

    /// Every snapshot recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the emphasized move-list entry, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Whether the move list reads oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        // The cursor invariant keeps this in range.
        &self.history.snapshots()[self.cursor]
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Places the active player's mark on `cell` (0-8).
    ///
    /// The move is ignored, leaving all state untouched, when the displayed
    /// board is already won, the cell is occupied, or the index is off the
    /// board. Otherwise every snapshot after the cursor is discarded, the
    /// new board is appended and displayed, and the highlight is cleared.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn play_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            return self.ignore(IgnoreReason::OutOfBounds(cell));
        };

        let board = *self.current_board();
        if rules::winning_line(&board).is_some() {
            return self.ignore(IgnoreReason::GameOver);
        }
        if !board.is_empty(position) {
            return self.ignore(IgnoreReason::SquareOccupied(position));
        }

        let player = self.next_player();
        self.cursor = self
            .history
            .branch_from(self.cursor, board.with_mark(position, player));
        self.highlight = None;

        debug!(%player, %position, step = self.cursor, "Move applied");
        self.assert_invariants();

        MoveOutcome::Played { player, position }
    }

    fn ignore(&self, reason: IgnoreReason) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    /// Displays snapshot `step` and emphasizes its move-list entry.
    ///
    /// History is not altered.
    ///
    /// # Errors
    ///
    /// Returns `JumpError` without changing state when `step` is not in
    /// history.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            debug!(len, "Jump target out of range");
            return Err(JumpError { step, len });
        }

        self.cursor = step;
        self.highlight = Some(step);
        debug!("Jumped");
        self.assert_invariants();
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Move list order toggled");
    }

    /// Dispatches an action to the matching operation.
    ///
    /// Returns the move outcome for `Play`, `None` for the others.
    ///
    /// # Errors
    ///
    /// Propagates `JumpError` from `JumpTo`.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: GameAction) -> Result<Option<MoveOutcome>, JumpError> {
        match action {
            GameAction::Play { cell } => Ok(Some(self.play_move(cell))),
            GameAction::JumpTo { step } => self.jump_to(step).map(|()| None),
            GameAction::ToggleOrder => {
                self.toggle_order();
                Ok(None)
            }
        }
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(player) = rules::check_winner(board) {
            GameStatus::Winner(player)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Complete line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.current_board())
    }

    /// Label for the move-list entry at `step`.
    ///
    /// `None` when `step` is not in history.
    pub fn move_description(&self, step: usize) -> Option<String> {
        if step >= self.history.len() {
            return None;
        }
        if step == 0 {
            return Some("Go to game start".to_string());
        }
        let coordinates = self.history.played_at(step)?.coordinates();
        Some(format!("Go to move #{step} ({coordinates})"))
    }

    /// Every history entry in logical order, oldest first.
    ///
    /// Reversing for display is left to the caller; `highlighted` follows
    /// the history index, not the rendered position.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .filter_map(|step| {
                self.move_description(step).map(|description| MoveEntry {
                    step,
                    description,
                    highlighted: self.highlight == Some(step),
                })
            })
            .collect()
    }

    /// Discards the session and starts over from the empty board.
    ///
    /// The move list order is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len() - 1, "Starting a fresh session");
        *self = Self::with_order(self.ascending);
    }

    fn assert_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
