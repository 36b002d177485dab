use thiserror::Error;

/// Errors surfaced by maze generation and solving.
///
/// Both kinds are usage errors and are never retried. A search that simply fails to reach
/// the exit is not an error; see [`crate::solvers::Solution::path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Bad input to a builder, e.g. a board size of zero.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The maze is not in a state the operation can work with.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
