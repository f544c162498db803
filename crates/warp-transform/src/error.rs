//! Error types for the warp transform.

use thiserror::Error;

/// Result type for warp transform operations.
pub type WarpResult<T> = Result<T, WarpError>;

/// Precondition violations detected before any shell is transformed.
#[derive(Debug, Error, PartialEq)]
pub enum WarpError {
    #[error("{what}: expected shape {expected:?}, found {found:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("normal vector array must have shape [{nr}, 3], found {found:?}")]
    InvalidNormals { nr: usize, found: Vec<usize> },
}
