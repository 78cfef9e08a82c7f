//! Error types for blob-nest.

use blob_core::{ConfigError, OutlineError};
use thiserror::Error;

/// Result type for blob-nest operations.
pub type Result<T> = std::result::Result<T, NestError>;

/// Errors that can occur while loading outlines or configuration.
///
/// The nesting algorithms themselves never fail; these errors come from
/// validating input at the crate boundary.
#[derive(Debug, Error)]
pub enum NestError {
    #[error(transparent)]
    Outline(#[from] OutlineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
