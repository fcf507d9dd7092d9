//! Error types for remote generation.

use thiserror::Error;

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Ways a remote generation attempt can fail. All of them end in a local
/// reading; none reaches the user as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Provider not usable as configured (no credential, bad client setup).
    #[error("remote generation not configured: {0}")]
    Configuration(String),

    /// Network failure or non-success status.
    #[error("remote transport failed: {0}")]
    Transport(String),

    /// Response did not carry usable text.
    #[error("malformed remote response: {0}")]
    Format(String),
}
