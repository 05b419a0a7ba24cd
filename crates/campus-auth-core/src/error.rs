//! Auth errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid token (malformed, undecodable, unknown role, etc.)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Backend rejected the credentials
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Backend rejected the request body (4xx with details)
    #[error("validation error: {0}")]
    Validation(String),

    /// Durable token storage failed
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable error code for UI-facing messages
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this failure means the session is no longer usable
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::InvalidToken | Self::TokenExpired)
    }
}
