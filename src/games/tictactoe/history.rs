//! Ordered board snapshots with branch-and-truncate semantics.

use super::position::Position;
use super::types::Board;
use serde::Serialize;
use tracing::{debug, instrument};

/// One immutable board configuration captured after a move.
pub type Snapshot = Board;

/// Every snapshot from game start to the latest move played.
///
/// `snapshots[0]` is always the empty board and `snapshots[n]` holds
/// exactly `n` marks. Appending from an earlier step discards the
/// snapshots after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `step` and appends `board`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn branch_from(&mut self, step: usize, board: Snapshot) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Discarding snapshots after branch point"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(board);
        self.snapshots.len() - 1
    }

    /// The cell played to reach `step` from `step - 1`.
    ///
    /// `None` for the starting board or an unrecorded step.
    pub fn played_at(&self, step: usize) -> Option<Position> {
        let previous = self.snapshots.get(step.checked_sub(1)?)?;
        self.snapshots.get(step)?.last_difference(previous)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
