//! First-class move events and the errors a move can produce.
//!
//! Moves are domain events, not side effects. The engine records every
//! accepted move in its history so games can be replayed and invariants
//! checked against what actually happened.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it lands.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the caller is told what was wrong and
/// the game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(Position),

    /// The cell at the position already holds a mark.
    #[display("Position {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
