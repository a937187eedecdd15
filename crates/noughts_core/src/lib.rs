//! Noughts core - pure tic-tac-toe game state.
//!
//! This crate holds the board, the active player and the terminal status,
//! plus the transition functions that move a game forward. It has no UI
//! dependency; shells forward click coordinates to [`GameState::apply_move`]
//! and redraw from the returned [`GameStatus`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! game.apply_move(0, 0).unwrap(); // X
//! game.apply_move(1, 0).unwrap(); // O
//! game.apply_move(0, 1).unwrap(); // X
//! game.apply_move(1, 1).unwrap(); // O
//! let status = game.apply_move(0, 2).unwrap(); // X completes the top row
//!
//! assert_eq!(status, GameStatus::Won(Player::X));
//! assert!(game.apply_move(2, 2).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use game::GameState;
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Player};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
