//! Tests for move history and time travel.

use strictly_timetravel::{
    Board, GameHistory, JumpError, MoveError, Outcome, Player, Position, Square, evaluate,
};

fn marks(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|s| match s {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        })
        .collect()
}

fn board_from(marks: &str) -> Board {
    let mut board = Board::new();
    for (pos, ch) in Position::ALL.iter().zip(marks.chars()) {
        match ch {
            'X' => board.set(*pos, Square::Occupied(Player::X)),
            'O' => board.set(*pos, Square::Occupied(Player::O)),
            _ => {}
        }
    }
    board
}

#[test]
fn test_occupied_square_is_noop() {
    let mut game = GameHistory::replay(&[4]).unwrap();
    let before = game.clone();

    let result = game.apply_move(4);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_occupied_square_is_noop_after_jump() {
    let mut game = GameHistory::replay(&[0, 4, 8]).unwrap();
    game.jump_to(2).unwrap();
    let before = game.clone();

    assert!(game.apply_move(0).is_err());
    assert_eq!(game, before);
    assert_eq!(game.len(), 4);
}

#[test]
fn test_no_move_after_win() {
    let mut game = GameHistory::replay(&[0, 4, 1, 3, 2]).unwrap();
    let before = game.clone();

    for cell in 0..9 {
        assert!(game.apply_move(cell).is_err());
    }
    assert_eq!(game, before);
}

#[test]
fn test_no_move_after_draw() {
    // X O X / X O O / O X X
    let mut game = GameHistory::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.status(), "Game Draw");
    assert_eq!(marks(game.active_board()), "XOXXOOOXX");

    let before = game.clone();
    assert_eq!(game.apply_move(0), Err(MoveError::GameOver(Outcome::Draw)));
    assert_eq!(game, before);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameHistory::new();
    let expected = [Player::X, Player::O, Player::X, Player::O, Player::X];

    for (cell, player) in [0, 4, 8, 2, 6].into_iter().zip(expected) {
        let action = game.apply_move(cell).unwrap();
        assert_eq!(action.player, player);
    }
}

#[test]
fn test_branch_and_prune() {
    let mut game = GameHistory::replay(&[0, 4, 8, 2]).unwrap();
    assert_eq!(game.len(), 5);

    game.jump_to(1).unwrap();
    assert_eq!(game.len(), 5, "jumping never truncates");

    let action = game.apply_move(6).unwrap();

    assert_eq!(action.player, Player::O);
    assert_eq!(game.len(), 3);
    assert_eq!(game.current_move(), 2);
    assert_eq!(marks(game.active_board()), "X_____O__");
    assert_eq!(game.move_labels(), vec!["Go to game start", "Go to move #1", "Go to move #2"]);
}

#[test]
fn test_branch_from_start_discards_everything() {
    let mut game = GameHistory::replay(&[0, 4, 1, 3, 2]).unwrap();
    game.jump_to(0).unwrap();
    game.apply_move(8).unwrap();

    assert_eq!(game.len(), 2);
    assert_eq!(marks(game.active_board()), "________X");
}

#[test]
fn test_move_from_end_keeps_history() {
    let mut game = GameHistory::replay(&[0, 4]).unwrap();
    game.jump_to(2).unwrap();
    game.apply_move(8).unwrap();
    assert_eq!(game.len(), 4);
}

#[test]
fn test_evaluate_is_deterministic() {
    let board = board_from("XXXOO____");
    assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    assert_eq!(evaluate(&board), evaluate(&board.clone()));
}

#[test]
fn test_draw_board() {
    assert_eq!(evaluate(&board_from("XOXXOOOXX")), Outcome::Draw);
}

#[test]
fn test_first_move_status() {
    let mut game = GameHistory::new();
    game.apply_move(0).unwrap();

    assert_eq!(marks(game.active_board()), "X________");
    assert_eq!(game.status(), "Next player: O");
}

#[test]
fn test_top_row_win() {
    let game = GameHistory::replay(&[0, 4, 1, 3, 2]).unwrap();

    assert_eq!(game.outcome(), Outcome::Won(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(game.status(), "Winner: X");
}

#[test]
fn test_jump_back_recomputes_status() {
    let mut game = GameHistory::replay(&[0, 4, 1, 3, 2]).unwrap();
    game.jump_to(2).unwrap();

    assert_eq!(game.active_board(), &game.snapshots()[2]);
    assert_eq!(marks(game.active_board()), "X___O____");
    assert!(game.x_is_next());
    assert_eq!(game.status(), "Next player: X");
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.len(), 6);
}

#[test]
fn test_jump_out_of_range() {
    let mut game = GameHistory::replay(&[0]).unwrap();
    let before = game.clone();

    assert_eq!(
        game.jump_to(2),
        Err(JumpError::OutOfRange { requested: 2, len: 2 })
    );
    assert!(game.jump_to(usize::MAX).is_err());
    assert_eq!(game, before);
}

#[test]
fn test_labels_follow_history() {
    let game = GameHistory::replay(&[0, 4, 8]).unwrap();
    assert_eq!(
        game.move_labels(),
        vec!["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"]
    );
}

#[test]
fn test_replay_stops_at_first_rejection() {
    assert_eq!(
        GameHistory::replay(&[4, 4]),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(GameHistory::replay(&[12]), Err(MoveError::OutOfBounds(12)));
}

#[test]
fn test_view_serializes() {
    let mut game = GameHistory::replay(&[0, 4, 1, 3, 2]).unwrap();
    game.jump_to(1).unwrap();

    let view = game.view();
    assert_eq!(view.current_move, 1);
    assert!(!view.x_is_next);
    assert_eq!(view.status, "Next player: O");
    assert_eq!(view.labels.len(), 6);
    assert_eq!(view.winning_line, None);

    let json = serde_json::to_string(&view).unwrap();
    let back: strictly_timetravel::GameView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
}
