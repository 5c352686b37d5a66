//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the active board must still be in progress.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects any move once the active board is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameHistory) -> Result<(), MoveError> {
        let outcome = game.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square of the active board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameHistory) -> Result<(), MoveError> {
        if game.active_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition: the game is in progress and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameHistory) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Active board is in progress
/// - Square is empty
///
/// Postconditions:
/// - All [`HistoryInvariants`] hold
/// - The cursor sits on the last snapshot
/// - Nothing before the old cursor changed
pub struct MoveContract;

impl Contract<GameHistory, Move> for MoveContract {
    fn pre(game: &GameHistory, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.current_move() + 1 != after.len() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor is not on the newest snapshot".to_string(),
            ));
        }

        let kept = before.current_move() + 1;
        if after.len() != kept + 1 || after.snapshots()[..kept] != before.snapshots()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history before the cursor changed".to_string(),
            ));
        }

        Ok(())
    }
}
