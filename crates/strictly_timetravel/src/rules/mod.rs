//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Nothing here looks at history or
//! whose turn it is; the engine derives those from its own state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board into an [`Outcome`].
///
/// A completed line wins even on a full board; otherwise a full board is a
/// draw and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
