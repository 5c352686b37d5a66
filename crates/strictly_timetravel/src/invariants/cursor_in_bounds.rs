//! Cursor invariant: the active move indexes an existing snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `current_move < snapshots.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.current_move() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing snapshot"
    }
}
