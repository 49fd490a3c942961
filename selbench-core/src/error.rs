//! Error taxonomy shared by the engine, the harness and the validators.

use thiserror::Error;

/// Errors raised at the point a precondition is violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Absent input, malformed input text or a non-positive size
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted in the current state (e.g. metrics disabled)
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Explicit bounds violation reported by a range-validation helper
    #[error("Index {index} out of bounds for array length {len}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Length of the sequence it was checked against
        len: usize,
    },
}

/// Result alias used throughout selbench-core
pub type Result<T> = std::result::Result<T, SortError>;
