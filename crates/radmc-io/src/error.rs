//! Error types for RADMC-3D file and process handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RadmcError.
pub type RadmcResult<T> = Result<T, RadmcError>;

#[derive(Debug, Error)]
pub enum RadmcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unsupported image format number: {0}")]
    UnsupportedFormat(i64),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with status {status:?}")]
    Solver {
        program: String,
        status: Option<i32>,
    },
}

impl RadmcError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
