//! Error types for the vector store and its HTTP boundary

use thiserror::Error;

/// Result type alias for Hermes operations
pub type Result<T> = std::result::Result<T, VectorDbError>;

/// Error types that can occur outside the core store operations.
///
/// Insert and search never fail; these variants cover request validation,
/// configuration and server I/O.
#[derive(Error, Debug)]
pub enum VectorDbError {
    #[error("Bad JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid vector: {reason}")]
    InvalidVector { reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl VectorDbError {
    /// Whether the error was caused by the client's request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            VectorDbError::InvalidJson(_) | VectorDbError::InvalidVector { .. }
        )
    }
}
