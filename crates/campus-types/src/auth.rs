//! Authentication wire types
//!
//! Request and response bodies for the portal's auth endpoints
//! (`/auth/login/`, `/auth/token/refresh/`, `/auth/register/`).

use serde::{Deserialize, Serialize};

use crate::Role;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address (the backend authenticates by email, not username)
    pub email: String,
    /// Password
    pub password: String,
}

/// Access/refresh token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token (JWT)
    pub access: String,
    /// Long-lived refresh token
    pub refresh: String,
}

/// Login response
///
/// The backend nests the token pair under `token` and echoes the user's
/// profile fields alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Issued token pair
    pub token: TokenPair,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Full display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role
    #[serde(default)]
    pub role: Option<Role>,
    /// Major / study program code
    #[serde(default)]
    pub major: Option<String>,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token issued at login
    pub refresh: String,
}

/// Token refresh response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Newly issued access token
    pub access: String,
    /// Rotated refresh token, when the backend rotates on refresh
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Campus email address
    pub email: String,
    /// Password
    pub password: String,
    /// The backend validates that both password fields match
    pub password_confirmation: String,
    /// Full display name
    pub full_name: String,
    /// Requested role
    pub role: Role,
    /// Major / study program code (students only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

/// Registration response (created user profile)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Backend user primary key
    pub id: i64,
    /// Email address
    pub email: String,
    /// Full display name
    pub full_name: String,
    /// Assigned role
    pub role: Role,
    /// Major / study program code
    #[serde(default)]
    pub major: Option<String>,
}
