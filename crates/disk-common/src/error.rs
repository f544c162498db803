//! Error types for loading disk profiles.

use thiserror::Error;

/// Result type alias using ProfileError.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised while reading or validating a disk radial profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML profile: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),

    #[error("Profile field '{field}' has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Normal vector {index} has {len} components, expected 3")]
    InvalidNormal { index: usize, len: usize },
}

impl ProfileError {
    pub fn length_mismatch(field: &'static str, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            field,
            expected,
            found,
        }
    }
}
