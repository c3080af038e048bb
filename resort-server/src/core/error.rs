//! 服务器级错误

use thiserror::Error;

/// Server-level errors (startup, shutdown, IO)
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
