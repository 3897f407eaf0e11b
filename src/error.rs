//! Error types for the puzzle engine.

use thiserror::Error;

/// Everything that can go wrong at the engine boundary.
///
/// All variants are local, recoverable conditions: callers are expected to
/// no-op or surface a message.  No operation partially mutates state before
/// returning one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate outside the board.
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Random boards need at least two rows and two columns.
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Generator parameters that cannot produce a board.
    #[error("generator configuration error: {0}")]
    Config(String),

    /// Undo was requested with no moves in the history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo was requested with no undone moves in the history.
    #[error("nothing to redo")]
    NothingToRedo,

    /// The board's shape layout admits no winning orientation assignment.
    #[error("no orientation assignment solves this board")]
    Unsolvable,

    /// A malformed text snapshot.
    #[error("snapshot parse error: {0}")]
    Parse(String),

    /// An I/O failure while loading or saving a snapshot.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
