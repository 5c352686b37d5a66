//! Non-interactive replay of a move list.

use anyhow::Result;
use serde::Serialize;
use strictly_timetravel::{GameHistory, GameView, Position};
use tracing::{instrument, warn};

/// Result of replaying a move list.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// State after all moves (and the optional jump).
    pub view: GameView,
    /// One line per ignored move or jump.
    pub rejected: Vec<String>,
}

/// Applies `moves` to a fresh game, skipping rejected moves, then jumps.
///
/// Each move is a cell number (0-8) or a position label such as `center`.
#[instrument(skip(moves))]
pub fn replay<S: AsRef<str>>(moves: &[S], jump: Option<usize>) -> ReplayReport {
    let mut game = GameHistory::new();
    let mut rejected = Vec::new();

    for raw in moves.iter().map(AsRef::as_ref) {
        let Some(position) = Position::from_label_or_number(raw) else {
            warn!(raw, "Unrecognised position");
            rejected.push(format!("move {}: unrecognised position", raw));
            continue;
        };
        if let Err(error) = game.apply_move(position.to_index()) {
            warn!(raw, %error, "Skipping move");
            rejected.push(format!("move {}: {}", raw, error));
        }
    }

    if let Some(index) = jump
        && let Err(error) = game.jump_to(index)
    {
        warn!(index, %error, "Skipping jump");
        rejected.push(format!("jump {}: {}", index, error));
    }

    ReplayReport {
        view: game.view(),
        rejected,
    }
}

/// Formats a report as plain text or pretty JSON.
pub fn render(report: &ReplayReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)? + "\n");
    }

    let mut out = String::new();
    out.push_str(&report.view.board.display());
    out.push_str("\n\n");
    out.push_str(&report.view.status);
    out.push_str("\n\n");
    for (index, label) in report.view.labels.iter().enumerate() {
        let marker = if index == report.view.current_move { ">" } else { " " };
        out.push_str(&format!("{} {}\n", marker, label));
    }
    for line in &report.rejected {
        out.push_str(&format!("ignored {}\n", line));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let report = replay(&["0", "4", "1", "3", "2"], Some(2));
        let text = render(&report, false).unwrap();
        assert_eq!(
            text,
            "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n\nNext player: X\n\n  Go to game start\n  Go to move #1\n> Go to move #2\n  Go to move #3\n  Go to move #4\n  Go to move #5\n"
        );
    }

    #[test]
    fn test_rejections_are_reported() {
        let report = replay(&["4", "4", "10", "middle"], Some(7));
        assert_eq!(report.view.current_move, 1);
        assert_eq!(report.rejected.len(), 4);
        let text = render(&report, false).unwrap();
        assert!(text.contains("ignored move 4: Square Center is already occupied"));
        assert!(text.contains("ignored move 10: unrecognised position"));
        assert!(text.contains("ignored move middle: unrecognised position"));
    }

    #[test]
    fn test_labels_and_numbers_mix() {
        let report = replay(&["top-left", "Center", "1", "middle-left", "top-right"], None);
        assert!(report.rejected.is_empty());
        assert_eq!(report.view.status, "Winner: X");
        assert_eq!(
            report.view.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_json_output() {
        let report = replay(&["0"], None);
        let json = render(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["view"]["status"], "Next player: O");
        assert_eq!(value["view"]["current_move"], 1);
    }
}
