//! Shared error type across Delphi crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed input (e.g. empty counter id).
    InvalidArgument,
    /// Target does not exist.
    NotFound,
    /// External collaborator answered with a failure.
    Upstream,
    /// External collaborator could not be reached in time.
    Unavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidArgument => "INVALID_ARGUMENT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::Unavailable => "UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DelphiError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DelphiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DelphiError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DelphiError::InvalidArgument(_) => ClientCode::InvalidArgument,
            DelphiError::NotFound(_) => ClientCode::NotFound,
            DelphiError::Upstream(_) => ClientCode::Upstream,
            DelphiError::Unavailable(_) => ClientCode::Unavailable,
            DelphiError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Human-readable detail without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            DelphiError::InvalidArgument(m)
            | DelphiError::NotFound(m)
            | DelphiError::Upstream(m)
            | DelphiError::Unavailable(m)
            | DelphiError::Internal(m) => m,
        }
    }
}
