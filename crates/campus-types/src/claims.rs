//! Access token claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Claims embedded in a portal access token
///
/// The backend issues standard JWT registered claims plus the custom
/// identity fields it stamps into every access token (`email`, `full_name`,
/// `role`, `major`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Backend user primary key
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Email address
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// User role
    pub role: Role,
    /// Major / study program code (students only)
    #[serde(default)]
    pub major: Option<String>,
    /// Issued-at timestamp (epoch seconds)
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration timestamp (epoch seconds)
    pub exp: i64,
}

impl Claims {
    /// Expiration as a UTC timestamp
    ///
    /// An out-of-range `exp` collapses to the epoch, which reads as expired.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}
