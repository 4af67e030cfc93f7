//! Win detection logic for tic-tac-toe.

use super::lines::{LINES, Line};
use crate::{Board, Player};
use tracing::instrument;

/// First line in [`LINES`] order held entirely by one player.
///
/// Shared by [`check_winner`] and [`winning_line`] so they cannot disagree.
pub(crate) fn completed_line(board: &Board) -> Option<(Line, Player)> {
    for line in LINES {
        let [a, b, c] = line.positions();
        if let Some(player) = board.get(a)
            && board.get(b) == Some(player)
            && board.get(c) == Some(player)
        {
            return Some((line, player));
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_line(board).map(|(_, player)| player)
}

/// Returns the line that wins the game, if any.
///
/// Reports the same line whose mark [`check_winner`] returns.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    completed_line(board).map(|(line, _)| line)
}
