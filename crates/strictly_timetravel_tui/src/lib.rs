//! Terminal frontend for strictly_timetravel.
//!
//! A thin shell: keys are routed to `apply_move` / `jump_to` and the screen is
//! redrawn from the engine's derived view after every event.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_to_cell, move_cursor};
pub use logging::init_file_logging;
pub use replay::{ReplayReport, render, replay};
pub use terminal::run_tui;
pub use ui::draw;
