//! Common types and utilities shared across the warpdisk crates.

pub mod constants;
pub mod error;
pub mod profile;

pub use error::{ProfileError, ProfileResult};
pub use profile::{DiskProfile, ProfileFormat};
