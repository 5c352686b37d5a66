//! Thread-safe handle around a [`GameHistory`].

use super::action::{JumpError, Move, MoveError};
use super::history::GameHistory;
use super::view::GameView;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// Shared game whose history and cursor change together under one lock.
///
/// Readers get owned copies, so nobody observes a history that has been
/// truncated but not yet extended.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameHistory>>,
}

impl SharedGame {
    /// Creates a shared handle over a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // Engine operations never panic halfway through an update, so a poisoned
    // lock still guards a consistent history.
    fn lock(&self) -> MutexGuard<'_, GameHistory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GameHistory::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, cell: usize) -> Result<Move, MoveError> {
        self.lock().apply_move(cell)
    }

    /// See [`GameHistory::jump_to`].
    #[instrument(skip(self))]
    pub fn jump_to(&self, move_index: usize) -> Result<(), JumpError> {
        self.lock().jump_to(move_index)
    }

    /// See [`GameHistory::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Consistent view of the current state.
    pub fn view(&self) -> GameView {
        self.lock().view()
    }

    /// Owned copy of the whole history.
    pub fn snapshot(&self) -> GameHistory {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{HistoryInvariants, InvariantSet};
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let game = SharedGame::new();
        let other = game.clone();
        game.apply_move(4).unwrap();
        assert_eq!(other.view().current_move, 1);
        other.reset();
        assert_eq!(game.snapshot(), GameHistory::new());
    }

    #[test]
    fn test_concurrent_moves_keep_invariants() {
        let game = SharedGame::new();
        let handles: Vec<_> = (0..9)
            .map(|cell| {
                let game = game.clone();
                thread::spawn(move || {
                    let _ = game.apply_move(cell);
                    let _ = game.jump_to(cell % 3);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let history = game.snapshot();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }
}
