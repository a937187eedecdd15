//! Tests for the tic-tac-toe game state machine.

use noughts_core::{Cell, GameState, GameStatus, MoveError, Player, Position};

fn play_all(game: &mut GameState, moves: &[(usize, usize)]) -> GameStatus {
    let mut status = game.status();
    for &(row, col) in moves {
        status = game.apply_move(row, col).expect("Valid move");
    }
    status
}

#[test]
fn test_move_changes_exactly_one_cell() {
    for pos in Position::ALL.into_iter().skip(1) {
        let mut game = GameState::new();
        game.apply_move(0, 0).expect("Opening move");

        let before = game.clone();
        let status = game.apply_move(pos.row(), pos.col()).expect("Empty cell");

        assert_eq!(status, GameStatus::InProgress);
        for other in Position::ALL {
            if other == pos {
                assert_eq!(game.board().get(other), Cell::Occupied(Player::O));
            } else {
                assert_eq!(game.board().get(other), before.board().get(other));
            }
        }
        assert_eq!(game.current_player(), Player::X);
    }
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = GameState::new();
    game.apply_move(1, 1).unwrap();
    let before = game.clone();

    let result = game.apply_move(1, 1);

    assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_x_wins_top_row() {
    let mut game = GameState::new();

    // X takes the top row, O plays the middle row.
    let status = play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(game.is_over());
}

#[test]
fn test_o_wins_column() {
    let mut game = GameState::new();

    let status = play_all(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);

    assert_eq!(status, GameStatus::Won(Player::O));
    assert_eq!(game.winner(), Some(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = GameState::new();

    // X O X
    // X O O
    // O X X
    let status = play_all(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let mut game = GameState::new();

    // X O X
    // O X O
    // O X X   <- final X completes the main diagonal with a full board
    let status = play_all(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let finished = game.clone();

    for pos in Position::ALL {
        let result = game.apply_move(pos.row(), pos.col());
        assert_eq!(result, Err(MoveError::GameOver));
    }
    assert_eq!(game, finished);
}

#[test]
fn test_reset_after_any_sequence() {
    let sequences: [&[(usize, usize)]; 3] = [
        &[],
        &[(1, 1), (0, 0), (2, 2)],
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    ];

    for moves in sequences {
        let mut game = GameState::new();
        play_all(&mut game, moves);

        game.reset();

        assert!(game.board().cells().iter().all(|cell| cell.is_empty()));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game, GameState::new());
    }
}

#[test]
fn test_reset_reopens_finished_game() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.reset();

    assert_eq!(game.apply_move(2, 2), Ok(GameStatus::InProgress));
}

#[test]
fn test_players_alternate_until_end() {
    let mut game = GameState::new();
    let mut expected = Player::X;

    for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)] {
        assert_eq!(game.current_player(), expected);
        game.apply_move(row, col).unwrap();
        expected = expected.opponent();
    }
}
