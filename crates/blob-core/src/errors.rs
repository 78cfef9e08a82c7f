//! Error types for outline construction and configuration.

use thiserror::Error;

/// Errors raised by the validated outline constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    #[error("Outline needs at least 3 vertices, found {count}")]
    TooFewVertices { count: usize },

    #[error("Vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("Chain outline has no steps")]
    EmptyChain,

    #[error("Invalid chain code {code} at step {index}: expected 0..=3")]
    InvalidChainCode { index: usize, code: u8 },

    #[error("Chain outline starting at {start:?} is not closed: it ends at {end:?}")]
    OpenChain { start: (i32, i32), end: (i32, i32) },
}

/// Errors raised when validating nesting configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Approximation tolerance must be finite and non-negative, got {value}")]
    InvalidTolerance { value: f32 },

    #[error("Minimum vertex count must be at least 3, got {value}")]
    InvalidMinVertices { value: usize },

    #[error("Minimum area must be finite and non-negative, got {value}")]
    InvalidMinArea { value: f32 },
}
