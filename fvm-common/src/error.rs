//! Common error types for FVM

use thiserror::Error;

/// Common result type for FVM operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across FVM services
///
/// Query functions never produce these; they only occur at the edges
/// (catalog loading, configuration, request validation).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be decoded
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
