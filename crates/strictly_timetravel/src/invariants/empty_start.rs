//! Empty start invariant: the first snapshot is the empty board.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `snapshots[0]` exists and has no marks.
pub struct EmptyStartInvariant;

impl Invariant<GameHistory> for EmptyStartInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots().first().is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
