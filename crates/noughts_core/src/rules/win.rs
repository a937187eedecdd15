//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line on which `player` holds all three cells.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Cell::Occupied(player);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if either player has three in a row.
///
/// Returns `Some(player)` for the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Occupied(player) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board, Player::X),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(
            winning_line(&board, Player::O),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&pos| (pos, Player::X)).collect();
            let board = board_with(&marks);
            assert_eq!(winning_line(&board, Player::X), Some(line));
        }
    }
}
