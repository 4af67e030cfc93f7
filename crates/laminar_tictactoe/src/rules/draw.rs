//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the game is drawn: the board is full and nobody has won.
///
/// Both conditions are evaluated, so callers need not check for a winner
/// first.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
