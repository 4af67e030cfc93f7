//! Exhaustive minimax move oracle.
//!
//! Scores are depth-aware so the engine prefers winning sooner and
//! losing later:
//! - win for the searching player at depth `d`: `WIN_SCORE - d`
//! - loss at depth `d`: `d - WIN_SCORE`
//! - draw: `0`
//!
//! The search backtracks by placing a mark, recursing, and clearing the cell
//! again, so the board is never copied. While a search runs the board holds
//! hypothetical marks; it is fully restored before returning.

use crate::rules::win::completed_line;
use crate::{Board, GameError, GameErrorKind, Player, Position};
use tracing::{debug, instrument, warn};

/// Base score of a win. Exceeds the deepest reachable ply (9).
pub const WIN_SCORE: i32 = 10;

/// Returns the `(row, col)` of the best move for `mark` on `board`.
///
/// Ties go to the first cell in row-major order.
///
/// Fails with [`GameErrorKind::AlreadyWon`] if the board has a winner and
/// with [`GameErrorKind::BoardFull`] if no cell is empty.
#[track_caller]
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, mark: Player) -> Result<(usize, usize), GameError> {
    let scores = score_moves(board, mark)?;

    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in scores {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    // score_moves only succeeds with at least one empty cell.
    let (pos, score) = best.ok_or_else(|| GameError::new(GameErrorKind::BoardFull))?;
    debug!(%mark, position = %pos, score, "Selected best move");
    Ok(pos.coords())
}

/// Minimax score of every empty cell for `mark`, in row-major order.
///
/// Same preconditions as [`best_move`].
#[track_caller]
#[instrument(skip(board))]
pub fn score_moves(board: &mut Board, mark: Player) -> Result<Vec<(Position, i32)>, GameError> {
    if let Some((_, winner)) = completed_line(board) {
        warn!(%winner, "Search requested on a decided board");
        return Err(GameError::new(GameErrorKind::AlreadyWon(winner)));
    }
    if board.is_full() {
        warn!("Search requested on a full board");
        return Err(GameError::new(GameErrorKind::BoardFull));
    }

    let mut scores = Vec::with_capacity(9);
    for pos in Position::ALL {
        if !board.place_at(pos, mark) {
            continue;
        }
        let score = evaluate(board, mark, false, 1);
        board.clear_at(pos);
        scores.push((pos, score));
    }

    debug!(%mark, candidates = scores.len(), "Scored candidate moves");
    Ok(scores)
}

/// Scores `board` for `mark`; `maximizing` says whether `mark` moves next.
fn evaluate(board: &mut Board, mark: Player, maximizing: bool, depth: i32) -> i32 {
    match completed_line(board) {
        Some((_, winner)) if winner == mark => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None if board.is_full() => return 0,
        None => {}
    }

    let mover = if maximizing { mark } else { mark.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.place_at(pos, mover) {
            continue;
        }
        let score = evaluate(board, mark, !maximizing, depth + 1);
        board.clear_at(pos);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
