//! Error types.
//!
//! Board errors are precondition violations by the caller. The board is never
//! modified when one is returned.

use thiserror::Error;

/// Errors raised by board mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The column is full or outside the board.
    #[error("invalid move: column {column} is full or out of range")]
    InvalidMove { column: usize },

    /// Nothing to take back in this column.
    #[error("cannot undo: column {column} is empty")]
    EmptyColumn { column: usize },
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
