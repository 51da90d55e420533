//! Draw detection: a full board with no winner ends the game.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winning run indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3, 3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3, 3);
        board.set(Position::new(1, 1), Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                let mark = if (row + col) % 2 == 0 { Mark::O } else { Mark::X };
                board.set(Position::new(row, col), mark).unwrap();
            }
        }
        assert!(is_full(&board));
    }
}
