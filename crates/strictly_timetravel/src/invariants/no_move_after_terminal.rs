//! Terminal invariant: nothing extends a won or drawn board.

use super::super::{GameHistory, rules};
use super::Invariant;

/// Invariant: only the last snapshot may be terminal.
pub struct NoMoveAfterTerminalInvariant;

impl Invariant<GameHistory> for NoMoveAfterTerminalInvariant {
    fn holds(game: &GameHistory) -> bool {
        match game.snapshots().split_last() {
            Some((_, earlier)) => earlier
                .iter()
                .all(|board| !rules::evaluate(board).is_terminal()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No snapshot follows a won or drawn board"
    }
}
