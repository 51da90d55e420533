//! Pure game core for two-player grid games of the m,n,k family.
//!
//! Players alternate placing marks on a `width x height` board; a move
//! wins when it completes a straight run of `win_line_length` equal
//! marks along a row, a column, or one of the two diagonals.
//!
//! # Architecture
//!
//! - **Board**: grid storage with bounds-checked access and immutable
//!   snapshotting. No game rules.
//! - **GameEngine**: turn alternation, end-of-game state machine,
//!   orchestration of win detection after every move.
//! - **Rules**: pure functions over board state, callable without an
//!   engine ([`rules::winning_line`], [`rules::is_full`]).
//! - **Invariants**: first-class engine properties checked in debug
//!   builds and testable independently.
//!
//! Presentation is somebody else's job: a host forwards "cell chosen"
//! events to [`GameEngine::play`] and renders the [`Snapshot`] it reads
//! back, highlighting the winning cells when the game ends.
//!
//! # Example
//!
//! ```
//! use gridline::{GameConfig, GameEngine, MoveOutcome, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameEngine::new(GameConfig::new(3, 3, 3)?);
//!
//! if let MoveOutcome::Accepted { next } = game.play(Position::new(1, 1))? {
//!     assert_eq!(next.to_string(), "X");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod engine;
mod position;
mod types;

// Public rule and invariant modules
pub mod invariants;
pub mod rules;

// Crate-level exports - moves and move errors
pub use action::{Move, MoveError};

// Crate-level exports - board storage
pub use board::{Board, Snapshot};

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - game engine
pub use engine::{GameEngine, MoveOutcome};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Cell, GameStatus, Mark};
