//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A coordinate on the board.
///
/// `row` counts down from the top edge, `col` counts right from the
/// left edge, both zero-based. Whether a position lies on a given board
/// is the board's question to answer; positions themselves are just
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translates the position by a signed offset.
    ///
    /// Returns `None` when the result would leave the grid through the
    /// top or left edge. The right and bottom edges are checked by the
    /// board lookups, which know the dimensions.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
