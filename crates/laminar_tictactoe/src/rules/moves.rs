//! Move legality.

use crate::{Board, GameError, Position};
use tracing::instrument;

/// Returns true if `(row, col)` is empty.
///
/// Does not look at whose turn it is or whether the game is over;
/// gating moves on game state is the caller's job.
#[track_caller]
#[instrument(level = "trace", skip(board))]
pub fn is_valid_move(board: &Board, row: usize, col: usize) -> Result<bool, GameError> {
    Ok(board.cell_at(row, col)?.is_none())
}

/// All empty positions, row-major.
#[instrument(skip(board))]
pub fn valid_moves(board: &Board) -> Vec<Position> {
    board.empty_positions().collect()
}
