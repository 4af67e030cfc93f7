//! Game session driver.
//!
//! Wraps a [`Board`] and the side to move, and applies the call protocol
//! a front end needs: validate, place, then re-check the outcome.

use crate::action::Move;
use crate::rules::{self, Line, Outcome};
use crate::{Board, GameError, GameErrorKind, Player, Position, minimax};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A tic-tac-toe session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    first: Player,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game where `first` moves first.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who opened this round.
    pub fn first(&self) -> Player {
        self.first
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns the winning line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board)
    }

    /// Places the mark of the side to move at `(row, col)`.
    ///
    /// Returns the outcome after the move. The turn passes to the opponent
    /// only while the game continues.
    #[track_caller]
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        if self.outcome().is_over() {
            return Err(GameError::new(GameErrorKind::GameOver));
        }
        if !rules::is_valid_move(&self.board, row, col)? {
            return Err(GameError::new(GameErrorKind::SquareOccupied { row, col }));
        }
        if !self.board.place(row, col, self.to_move)? {
            return Err(GameError::new(GameErrorKind::SquareOccupied { row, col }));
        }

        let position = Position::from_coords(row, col)?;
        let action = Move::new(self.to_move, position);
        self.history.push(action);
        debug!(%action, "Move applied");

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(outcome)
    }

    /// Lets the engine play for the side to move.
    #[track_caller]
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_best(&mut self) -> Result<(Move, Outcome), GameError> {
        if self.outcome().is_over() {
            return Err(GameError::new(GameErrorKind::GameOver));
        }
        let player = self.to_move;
        let (row, col) = minimax::best_move(&mut self.board, player)?;
        let outcome = self.make_move(row, col)?;
        let position = Position::from_coords(row, col)?;
        Ok((Move::new(player, position), outcome))
    }

    /// Starts a new round: empty board, first player to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.to_move = self.first;
    }

    /// Snapshot of the round for reporting.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            first: self.first,
            moves: self.history.clone(),
            outcome: self.outcome(),
            winning_line: self.winning_line(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// Serializable summary of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Player who opened.
    pub first: Player,
    /// Moves in play order.
    pub moves: Vec<Move>,
    /// Outcome when the record was taken.
    pub outcome: Outcome,
    /// Winning line, if any.
    pub winning_line: Option<Line>,
}
