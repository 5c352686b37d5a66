//! Derived values handed to the presentation layer.

use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// Status line for an outcome and the player to move.
///
/// `"Winner: X"`, `"Game Draw"` or `"Next player: O"`.
pub fn status_text(outcome: Outcome, to_move: Player) -> String {
    match outcome {
        Outcome::Won(winner) => format!("Winner: {}", winner),
        Outcome::Draw => "Game Draw".to_string(),
        Outcome::InProgress => format!("Next player: {}", to_move),
    }
}

/// Navigation label for the snapshot at `move_index`.
pub fn move_label(move_index: usize) -> String {
    if move_index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", move_index)
    }
}

/// Snapshot of everything a frontend needs after a transition.
///
/// Built on demand by [`crate::GameHistory::view`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The active board.
    pub board: Board,
    /// Status line for the active board.
    pub status: String,
    /// Outcome of the active board.
    pub outcome: Outcome,
    /// Index of the active snapshot.
    pub current_move: usize,
    /// True when X moves next.
    pub x_is_next: bool,
    /// One navigation label per snapshot.
    pub labels: Vec<String>,
    /// First completed line, if any.
    pub winning_line: Option<[Position; 3]>,
}
