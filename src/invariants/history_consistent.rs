//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: history length equals the number of occupied cells.
///
/// Every recorded move corresponds to exactly one occupied cell; no
/// cell is filled without a move, no move is missing its cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let occupied = engine
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        engine.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches the number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameEngine::default();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut game = GameEngine::default();
        for (idx, pos) in [
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(2, 0),
        ]
        .into_iter()
        .enumerate()
        {
            game.play(pos).unwrap();
            assert!(HistoryConsistentInvariant::holds(&game));
            assert_eq!(game.history().len(), idx + 1);
        }
    }

    #[test]
    fn test_cell_without_move_violates() {
        let mut game = GameEngine::default();
        game.play(Position::new(1, 1)).unwrap();

        game.board.set(Position::new(0, 0), Mark::X).unwrap();

        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
