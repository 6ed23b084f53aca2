//! Error types for board construction and solving.

use thiserror::Error;

/// Errors raised while building a [`Board`](crate::board::Board).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("board size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("queen in column {col} is on row {row}, outside a board of size {size}")]
    RowOutOfRange { col: usize, row: usize, size: usize },

    #[error("failed to allocate conflict tables for a board of size {size}")]
    Allocation { size: usize },
}

/// Errors raised by the solver.
///
/// Running out of steps is not an error; see
/// [`SolveResult::solved`](crate::search::SolveResult).
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The conflict tables reported zero conflicts but the placement does
    /// not validate. Indicates a lost counter update.
    #[error("placement reported conflict-free but columns {first} and {second} attack each other")]
    InconsistentSolution { first: usize, second: usize },
}
