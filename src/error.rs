//! Error types for the Infinity API

use thiserror::Error;

/// Main result type for Infinity API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the persistence layer.
///
/// Every storage failure carries the underlying driver message verbatim;
/// nothing is retried or classified further than these three variants.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Query error: {message}")]
    Query { message: String },

    #[error("Migration error: {message}")]
    Migration { message: String },
}
