//! Tic-tac-toe with move history and time travel.
//!
//! The engine keeps every board snapshot since game start plus a cursor on the
//! one being shown. Moving from an earlier snapshot prunes everything after
//! it, so there is always exactly one linear timeline.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure board evaluation ([`evaluate`], [`winning_line`])
//! - **History**: [`GameHistory`] with `apply_move` / `jump_to`
//! - **Contracts**: pre/postconditions and history invariants
//! - **View**: [`GameView`], status line and navigation labels
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameHistory, Outcome, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//! assert_eq!(game.status(), "Winner: X");
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status(), "Next player: X");
//! assert_eq!(game.len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod shared;
mod types;
mod view;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Moves and errors
pub use action::{JumpError, Move, MoveError};

// Crate-level exports - Rules
pub use outcome::Outcome;
pub use rules::{check_winner, evaluate, winning_line};

// Crate-level exports - Engine
pub use contracts::{Contract, GameInProgress, LegalMove, MoveContract, SquareIsEmpty};
pub use history::GameHistory;
pub use shared::SharedGame;
pub use view::{GameView, move_label, status_text};
