//! Tic-tac-toe rules and a perfect-play move oracle.
//!
//! # Architecture
//!
//! - **Board**: mutable 3x3 grid of optional marks
//! - **Rules**: pure win, draw, and legality checks over a board
//! - **Minimax**: exhaustive search returning an optimal move
//! - **Game**: session driver that sequences the three for a front end
//!
//! # Example
//!
//! ```
//! use laminar_tictactoe::{Board, Player, minimax, rules};
//!
//! # fn example() -> Result<(), laminar_tictactoe::GameError> {
//! let mut board = Board::new();
//! board.place(0, 0, Player::X)?;
//! board.place(0, 1, Player::X)?;
//! board.place(1, 0, Player::O)?;
//!
//! // O must block the top row.
//! assert_eq!(minimax::best_move(&mut board, Player::O)?, (0, 2));
//! assert_eq!(rules::check_winner(&board), None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod minimax;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use board::Board;
pub use error::{GameError, GameErrorKind};
pub use game::{Game, GameRecord};
pub use position::Position;
pub use rules::{Line, Outcome};
pub use types::{Mark, Player};
