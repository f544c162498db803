//! Error types for model assembly.

use disk_common::ProfileError;
use thiserror::Error;
use warp_transform::WarpError;

/// Errors that can occur while building the disk model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The grid definition is inconsistent.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Two arrays that must be combined elementwise disagree in shape.
    #[error("shape mismatch for {what}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Invalid input profile.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Warp transform precondition failed.
    #[error(transparent)]
    Warp(#[from] WarpError),
}

impl ModelError {
    /// Create an InvalidGrid error.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Create a ConfigError.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigError(format!("YAML error: {}", err))
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
