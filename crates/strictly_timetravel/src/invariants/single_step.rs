//! Single step invariant: each snapshot adds exactly one mark.

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: every snapshot after the first differs from its predecessor in
/// exactly one square, which went from empty to the mover's mark.
///
/// The mover of snapshot `i` is the player to move from snapshot `i - 1`,
/// so marks alternate X, O, X, ...
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                match before.diff(after).as_slice() {
                    [position] => {
                        before.is_empty(*position)
                            && after.get(*position).player() == Some(Player::for_move(index))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}
