//! Client errors
//!
//! The error taxonomy the UI renders from: a request either never got a
//! response (Network), was rejected with field-level details (Validation),
//! failed authentication and tore the session down (Auth), or failed in a
//! way the client cannot classify (Unknown). Nothing here is fatal to the
//! process.

use std::collections::BTreeMap;

use thiserror::Error;

use campus_auth_core::AuthError;

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors for portal API operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request produced no response (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the request (4xx), with per-field details
    #[error("validation error ({status}): {detail}")]
    Validation {
        /// HTTP status code
        status: u16,
        /// Human-readable summary
        detail: String,
        /// Per-field error messages, DRF style
        fields: BTreeMap<String, Vec<String>>,
    },

    /// Authentication failed and the session has been torn down;
    /// the caller must send the user back to login
    #[error("authentication required: {0}")]
    Auth(String),

    /// Anything the client cannot classify (5xx, malformed bodies)
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ClientError {
    /// Whether retrying the same request can succeed
    ///
    /// Only transport failures are retryable; validation and auth failures
    /// need user action first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether this failure invalidated the session
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Messages for one field of a validation failure, if present
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        match self {
            Self::Validation { fields, .. } => fields.get(field).map(Vec::as_slice),
            _ => None,
        }
    }
}

impl From<AuthError> for ClientError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Network(msg) => Self::Network(msg),
            AuthError::InvalidToken | AuthError::TokenExpired => Self::Auth(err.to_string()),
            AuthError::InvalidCredentials(msg) => Self::Auth(msg),
            AuthError::Validation(msg) => Self::Validation {
                status: 400,
                detail: msg,
                fields: BTreeMap::new(),
            },
            AuthError::Storage(msg) | AuthError::Internal(msg) => Self::Unknown(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_network_is_retryable() {
        assert!(ClientError::Network("connection refused".to_string()).is_retryable());
        assert!(!ClientError::Auth("token expired".to_string()).is_retryable());
        assert!(!ClientError::Unknown("500".to_string()).is_retryable());
        let validation = ClientError::Validation {
            status: 400,
            detail: "bad".to_string(),
            fields: BTreeMap::new(),
        };
        assert!(!validation.is_retryable());
    }

    #[test]
    fn test_field_errors_accessor() {
        let mut fields = BTreeMap::new();
        fields.insert(
            "email".to_string(),
            vec!["Email sudah terdaftar.".to_string()],
        );
        let err = ClientError::Validation {
            status: 400,
            detail: "email: Email sudah terdaftar.".to_string(),
            fields,
        };
        assert_eq!(
            err.field_errors("email"),
            Some(&["Email sudah terdaftar.".to_string()][..])
        );
        assert!(err.field_errors("password").is_none());
        assert!(ClientError::Unknown("x".to_string())
            .field_errors("email")
            .is_none());
    }

    #[test]
    fn test_auth_error_mapping() {
        let err: ClientError = AuthError::TokenExpired.into();
        assert!(err.is_auth_failure());

        let err: ClientError = AuthError::Network("timeout".to_string()).into();
        assert!(err.is_retryable());
    }
}
