//! The nine cells of the board and their coordinates.

use crate::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions are laid out row-major: `TopLeft` is `(0, 0)`,
/// `BottomRight` is `(2, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left, `(0, 0)`.
    TopLeft,
    /// Top-center, `(0, 1)`.
    TopCenter,
    /// Top-right, `(0, 2)`.
    TopRight,
    /// Middle-left, `(1, 0)`.
    MiddleLeft,
    /// Center, `(1, 1)`.
    Center,
    /// Middle-right, `(1, 2)`.
    MiddleRight,
    /// Bottom-left, `(2, 0)`.
    BottomLeft,
    /// Bottom-center, `(2, 1)`.
    BottomCenter,
    /// Bottom-right, `(2, 2)`.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts zero-based `(row, col)` into a position.
    ///
    /// Fails with [`GameErrorKind::OutOfRange`] unless both are in `0..=2`.
    #[track_caller]
    #[instrument(level = "trace")]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, GameError> {
        if row > 2 || col > 2 {
            return Err(GameError::new(GameErrorKind::OutOfRange { row, col }));
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the zero-based `(row, col)` of this position.
    pub fn coords(self) -> (usize, usize) {
        let index = self.index();
        (index / 3, index % 3)
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
