//! Single mark invariant: each snapshot adds exactly one mark.

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: Snapshot `n` holds `n` marks and differs from snapshot
/// `n - 1` in exactly one cell, which was empty before and now holds
/// the mark of the player whose turn it was.
pub struct SingleMarkStepInvariant;

impl Invariant<GameEngine> for SingleMarkStepInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let snapshots = engine.history().snapshots();

        let counts_match = snapshots
            .iter()
            .enumerate()
            .all(|(step, board)| board.occupied_count() == step);

        counts_match
            && snapshots.windows(2).enumerate().all(|(step, pair)| {
                let changed: Vec<_> = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .collect();

                matches!(
                    changed.as_slice(),
                    [(Square::Empty, Square::Occupied(player))] if *player == Player::for_step(step)
                )
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}
