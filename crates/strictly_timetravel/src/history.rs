//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot since the start of the game and a
//! cursor pointing at the one currently displayed. Whose turn it is, the
//! outcome, the status line and the history labels are all derived from
//! those two fields on every read.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::view::{GameView, move_label, status_text};
use super::{Board, Outcome, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Linear timeline of board snapshots plus the active cursor.
///
/// `snapshots[0]` is always the empty board and `current_move` always
/// indexes an existing snapshot. Only [`GameHistory::apply_move`] grows the
/// history; [`GameHistory::jump_to`] only moves the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a history by applying `cells` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.apply_move(cell)?;
        }
        Ok(game)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The board at the cursor.
    pub fn active_board(&self) -> &Board {
        &self.snapshots[self.current_move]
    }

    /// True when X moves from the active snapshot.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Player who moves from the active snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Outcome of the active board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.active_board())
    }

    /// Positions of the first completed line on the active board.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.active_board()).map(|(_, line)| line)
    }

    /// Status line for the active snapshot.
    pub fn status(&self) -> String {
        status_text(self.outcome(), self.to_move())
    }

    /// Navigation label for every snapshot, in history order.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(move_label).collect()
    }

    /// Empty positions of the active board; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.active_board())
        }
    }

    /// The move that produced snapshot `index`.
    ///
    /// `None` for the starting board and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        if index == 0 {
            return None;
        }
        let before = self.snapshots.get(index - 1)?;
        let after = self.snapshots.get(index)?;
        match before.diff(after).as_slice() {
            [position] => after
                .get(*position)
                .player()
                .map(|player| Move::new(player, *position)),
            _ => None,
        }
    }

    /// Everything the presentation layer renders, computed fresh.
    pub fn view(&self) -> GameView {
        GameView {
            board: *self.active_board(),
            status: self.status(),
            outcome: self.outcome(),
            current_move: self.current_move,
            x_is_next: self.x_is_next(),
            labels: self.move_labels(),
            winning_line: self.winning_line(),
        }
    }

    /// Places the current player's mark on `cell` (0-8).
    ///
    /// Any snapshots after the cursor are discarded before the new board is
    /// appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// Rejects out-of-bounds cells, occupied squares and moves on a finished
    /// board. A rejected call leaves the history and cursor untouched.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        let action = Move::new(self.to_move(), position);

        if let Err(error) = MoveContract::pre(self, &action) {
            debug!(%error, "Move rejected");
            return Err(error);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.active_board().with_mark(position, action.player);
        let pruned = self.snapshots.len() - (self.current_move + 1);
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(error) = MoveContract::post(&before, self) {
            *self = before;
            return Err(error);
        }

        info!(
            player = %action.player,
            position = %action.position,
            pruned,
            current_move = self.current_move,
            "Move applied"
        );
        Ok(action)
    }

    /// Moves the cursor to snapshot `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Out-of-range indices are rejected and the cursor stays where it was.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.snapshots.len() {
            debug!("Jump rejected");
            return Err(JumpError::OutOfRange {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.current_move = move_index;
        debug!("Jumped");
        Ok(())
    }

    /// Starts a new game session.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.snapshots.len() - 1, "Resetting game");
        *self = Self::new();
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_starts_empty() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert!(!game.is_empty());
        assert_eq!(game.current_move(), 0);
        assert!(game.active_board().is_blank());
        assert!(game.x_is_next());
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move_appends_snapshot() {
        let mut game = GameHistory::new();
        let action = game.apply_move(4).unwrap();
        assert_eq!(action, Move::new(Player::X, Position::Center));
        assert_eq!(game.len(), 2);
        assert_eq!(game.current_move(), 1);
        assert!(game.snapshots()[0].is_blank());
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameHistory::new();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, GameHistory::new());
    }

    #[test]
    fn test_move_at_recovers_moves() {
        let game = GameHistory::replay(&[0, 4, 8]).unwrap();
        assert_eq!(game.move_at(0), None);
        assert_eq!(game.move_at(1), Some(Move::new(Player::X, Position::TopLeft)));
        assert_eq!(game.move_at(2), Some(Move::new(Player::O, Position::Center)));
        assert_eq!(game.move_at(3), Some(Move::new(Player::X, Position::BottomRight)));
        assert_eq!(game.move_at(4), None);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameHistory::replay(&[0, 4, 8]).unwrap();
        game.jump_to(1).unwrap();
        assert_eq!(game.len(), 4);
        assert_eq!(game.current_move(), 1);
        game.jump_to(3).unwrap();
        assert_eq!(game.current_move(), 3);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut game = GameHistory::replay(&[0, 4]).unwrap();
        let before = game.clone();
        assert_eq!(
            game.jump_to(3),
            Err(JumpError::OutOfRange { requested: 3, len: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = GameHistory::replay(&[0, 4, 8]).unwrap();
        game.reset();
        assert_eq!(game, GameHistory::new());
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let game = GameHistory::replay(&[0, 4, 1, 3, 2]).unwrap();
        assert!(game.valid_moves().is_empty());
        let fresh = GameHistory::new();
        assert_eq!(fresh.valid_moves().len(), 9);
    }
}
