//! Game construction parameters.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Construction parameters for a game: board dimensions and the run
/// length required to win.
///
/// A `GameConfig` can only be built through [`GameConfig::new`], so an
/// engine never sees a board nobody can win on or a zero-sized grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Consecutive same-mark cells required to win.
    win_line_length: usize,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Rejects zero dimensions, a zero run length, and a run length
    /// longer than the longest board axis.
    #[instrument]
    pub fn new(width: usize, height: usize, win_line_length: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if win_line_length == 0 {
            return Err(ConfigError::ZeroWinLineLength);
        }
        let longest_axis = width.max(height);
        if win_line_length > longest_axis {
            return Err(ConfigError::WinLineTooLong {
                win_line_length,
                longest_axis,
            });
        }
        Ok(Self {
            width,
            height,
            win_line_length,
        })
    }
}

impl Default for GameConfig {
    /// Classic 3x3 board, three in a row to win.
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            win_line_length: 3,
        }
    }
}

/// Rejected game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Board must have at least one column.
    #[display("Board width must be at least 1")]
    ZeroWidth,

    /// Board must have at least one row.
    #[display("Board height must be at least 1")]
    ZeroHeight,

    /// A run length of zero would make every move a win.
    #[display("Win line length must be at least 1")]
    ZeroWinLineLength,

    /// No axis of the board can hold the requested run.
    #[display(
        "Win line length {} exceeds the longest board axis ({})",
        win_line_length,
        longest_axis
    )]
    WinLineTooLong {
        /// The requested run length.
        win_line_length: usize,
        /// The longest axis the board offers.
        longest_axis: usize,
    },
}
