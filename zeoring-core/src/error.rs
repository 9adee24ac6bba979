//! Structured error types for the zeoring workspace.

use thiserror::Error;

/// Unified error type for all ring-search operations.
#[derive(Debug, Error)]
pub enum ZeoringError {
    /// Invalid input (bad seed index, empty ring-size set, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A connectivity matrix that breaks its contract (wrong size, asymmetric, self bonds)
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// Geometry failure (degenerate cell, unknown atom index)
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the zeoring crates.
pub type Result<T> = std::result::Result<T, ZeoringError>;
