//! Alternating turn invariant: marks alternate from the opening mark.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{GameStatus, Mark};

/// Invariant: marks alternate turns.
///
/// The history must open with [`Mark::FIRST`] and alternate from there.
/// While the game is in progress, `to_move` must match the history
/// parity; once the game has ended the turn is frozen and only the
/// history pattern is checked.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first() {
            if first.mark != Mark::FIRST {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].mark == window[1].mark {
                return false;
            }
        }

        if matches!(engine.status(), GameStatus::InProgress) {
            let expected = if history.len() % 2 == 0 {
                Mark::FIRST
            } else {
                Mark::FIRST.opponent()
            };
            return engine.to_move() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "Marks alternate turns starting from the opening mark"
    }
}
