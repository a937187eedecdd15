//! Game state machine for tic-tac-toe.

use crate::action::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::{Board, Cell, GameStatus, Player};
use crate::{Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state: board, player to move and terminal status.
///
/// Moves are accepted only while the status is [`GameStatus::InProgress`]
/// and only on empty cells. Anything else is rejected without touching the
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// After a win this is the winner; after a draw it is the player who
    /// filled the last cell.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winner()
            .and_then(|winner| rules::winning_line(&self.board, winner))
    }

    /// Returns the positions that would accept a move right now.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Places the current player's mark at zero-based `(row, col)`.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] and leaves the state unchanged when the
    /// coordinates are off the board, the cell is occupied, or the game is
    /// already over.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::apply_move`], minus the bounds check.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            debug!(status = ?self.status, "Rejected move after game end");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Cell::Occupied(self.current_player));
        let status = self.evaluate_termination();
        debug!(position = %pos, board = %self.board.display(), "Board after move");

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after move at {pos}"
        );

        Ok(status)
    }

    /// Resets to a fresh game: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Settles the status after the current player's mark was placed.
    ///
    /// Only the player who just moved can have completed a line.
    fn evaluate_termination(&mut self) -> GameStatus {
        let mover = self.current_player;

        if let Some(line) = rules::winning_line(&self.board, mover) {
            info!(winner = %mover, ?line, "Game won");
            self.status = GameStatus::Won(mover);
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mover.opponent();
        }

        self.status
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
