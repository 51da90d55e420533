//! The turn state machine: orchestrates moves, win detection, and reset.

use crate::action::{Move, MoveError};
use crate::board::{Board, Snapshot};
use crate::config::GameConfig;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Mark};
use tracing::{debug, instrument};

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game continues.
    Accepted {
        /// The mark to move next.
        next: Mark,
    },
    /// The move completed a winning run.
    Won {
        /// The winning cells, ordered along their axis.
        line: Vec<Position>,
        /// The mark that won.
        winner: Mark,
    },
    /// The move filled the board with no winner.
    Draw,
}

/// Two-player game engine: owns the board, the turn, and the end state.
///
/// A new engine starts in progress with [`Mark::FIRST`] to move. After
/// a terminal move the engine rejects further moves with
/// [`MoveError::GameOver`] until [`reset`](GameEngine::reset), which
/// returns to a fresh in-progress game from any state.
///
/// The turn lives here and nowhere else: it is mutated only by `play`
/// and `reset`, never by board access or rendering.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Starts a new game from a validated configuration.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(*config.width(), *config.height());
        Self {
            config,
            board,
            to_move: Mark::FIRST,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays the current mark at `pos`.
    ///
    /// On success the engine either stays in progress with the turn
    /// flipped, or transitions to `Won` or `Draw`. On error nothing
    /// changes: the board, the turn, and the history are exactly as
    /// before the call.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `OutOfBounds` outside the
    /// grid, `SquareOccupied` when the cell already holds a mark.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board.set(pos, self.to_move)?;
        self.history.push(Move::new(self.to_move, pos));

        let snapshot = self.board.snapshot();
        let win_line_length = *self.config.win_line_length();
        if let Some(line) = rules::winning_line(&snapshot, pos, win_line_length) {
            let winner = self.to_move;
            debug!(%winner, "run completed");
            self.status = GameStatus::Won {
                line: line.clone(),
                winner,
            };
            return Ok(MoveOutcome::Won { line, winner });
        }

        if rules::is_full(&self.board) {
            debug!("board full with no winner");
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.to_move = self.to_move.opponent();
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after accepted move"
        );
        Ok(MoveOutcome::Accepted { next: self.to_move })
    }

    /// Abandons the current game and starts over: cleared board, empty
    /// history, first mark to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Mark::FIRST;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Reconstructs a game by playing `moves` in order from a fresh
    /// engine. Stops at the first terminal transition; any trailing
    /// moves are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the first [`MoveError`] an illegal move produces.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new(config);
        for &pos in moves {
            match engine.play(pos)? {
                MoveOutcome::Accepted { .. } => {}
                MoveOutcome::Won { .. } | MoveOutcome::Draw => break,
            }
        }
        Ok(engine)
    }

    /// Returns the configuration the game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    ///
    /// Once the game ends this stays at the mark that moved last.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Takes a read-only snapshot of the grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// All empty in-range positions, row by row.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                let pos = Position::new(row, col);
                if self.board.is_empty_cell(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }
}

impl Default for GameEngine {
    /// A classic 3x3, three-in-a-row game.
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
