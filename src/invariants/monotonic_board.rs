//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::board::Board;
use crate::engine::GameEngine;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to occupied it keeps that mark.
/// Verified by replaying the move history onto a fresh board and
/// comparing with the engine's board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new(engine.board().width(), engine.board().height());

        for mov in engine.history() {
            if reconstructed.set(mov.position, mov.mark).is_err() {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
