//! Mutable 3x3 board state.

use crate::{GameError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed either by [`Position`] or by zero-based
/// `(row, col)` coordinates where `(0, 0)` is the top-left corner.
/// A cell only goes from empty to occupied through [`Board::place`] and
/// back through [`Board::clear`] or [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Option<Player>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Returns the player occupying `(row, col)`, or `None` if empty.
    #[track_caller]
    #[instrument(level = "trace", skip(self))]
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<Player>, GameError> {
        let pos = Position::from_coords(row, col)?;
        Ok(self.get(pos))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `Ok(false)` and leaves the board untouched if the cell is
    /// already occupied.
    #[track_caller]
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Player) -> Result<bool, GameError> {
        let pos = Position::from_coords(row, col)?;
        Ok(self.place_at(pos, mark))
    }

    /// Empties `(row, col)` whatever it held.
    #[track_caller]
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let pos = Position::from_coords(row, col)?;
        self.clear_at(pos);
        Ok(())
    }

    /// Gets the occupant of `pos`.
    pub fn get(&self, pos: Position) -> Option<Player> {
        self.cells[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Places `mark` at `pos` if it is empty; returns whether it did.
    pub fn place_at(&mut self, pos: Position, mark: Player) -> bool {
        let cell = &mut self.cells[pos.index()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(mark);
        true
    }

    /// Empties `pos`.
    pub fn clear_at(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns true when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Clears all cells.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [None; 9];
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Option<Player>; 9] {
        &self.cells
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Some(player) => write!(f, "{}", player.symbol())?,
                    None => write!(f, "{}", pos + 1)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Player::X);
        board.place_at(Position::Center, Player::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut board = Board::new();
        board.place_at(Position::TopCenter, Player::X);
        board.place_at(Position::BottomRight, Player::O);
        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(
            empty,
            vec![
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
            ]
        );
    }

    #[test]
    fn test_serializes_cells_as_marks() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Player::X);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["cells"][0], "X");
        assert!(json["cells"][1].is_null());
    }
}
