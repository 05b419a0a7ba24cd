//! Session management
//!
//! The session manager is the single owner of the authenticated identity.
//! It derives the session from durable storage at startup, drives the
//! login/refresh/logout lifecycle against the backend, and mirrors every
//! mutation into the token store. Readers get clones; nothing else writes.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use campus_types::{
    Claims, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest,
    RegisterResponse, Role,
};

use crate::store::{FileTokenStore, StoredTokens, TokenStore};
use crate::token::{decode_claims, is_expired};
use crate::{AuthConfig, AuthError};

/// The authenticated user's in-memory identity and tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Access token attached to outgoing requests
    pub access_token: String,
    /// Refresh token exchanged when the access token expires
    pub refresh_token: String,
    /// Claims decoded from the access token
    pub claims: Claims,
}

impl Session {
    /// The session's role
    pub fn role(&self) -> Role {
        self.claims.role
    }

    /// The session's email
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

#[derive(Debug, Default)]
struct SessionState {
    session: Option<Session>,
    /// Whether startup loading has completed (drives the guard out of Loading)
    loaded: bool,
    /// Bumped on every teardown; in-flight logins/refreshes that lose the
    /// race must not resurrect a torn-down session
    generation: u64,
}

/// Auth session manager
///
/// Process-wide singleton scoped to the application lifetime; share it via
/// `Arc`. Network operations are plain futures, so dropping one on view
/// teardown cancels the request; a response that arrives after `logout()`
/// is discarded via the generation check.
pub struct SessionManager {
    config: AuthConfig,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Create a manager with a file-backed store at the configured path
    pub fn new(config: AuthConfig) -> Self {
        let store = Arc::new(FileTokenStore::new(config.storage_path.clone()));
        Self::with_store(config, store)
    }

    /// Create a manager with a custom token store
    pub fn with_store(config: AuthConfig, store: Arc<dyn TokenStore>) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client, timeouts not applied: {}", e);
                reqwest::Client::new()
            });

        Self::with_client(config, store, http)
    }

    /// Create a manager with a custom HTTP client
    ///
    /// Use this to share a client with the API layer or to inject custom
    /// TLS/proxy settings.
    pub fn with_client(
        config: AuthConfig,
        store: Arc<dyn TokenStore>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            config,
            http,
            store,
            state: RwLock::new(SessionState::default()),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Derive the session from durable storage
    ///
    /// Runs once at process start. If a token pair is present and the access
    /// token is unexpired by its claims, the session is populated; otherwise
    /// storage is cleared and the session stays empty. Either way the
    /// manager is marked loaded.
    pub fn load_from_storage(&self) -> Option<Session> {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!("Failed to load token store: {}", e);
                None
            }
        };

        let session = stored.and_then(|tokens| {
            if is_expired(&tokens.user_data, Utc::now()) {
                tracing::debug!("Stored access token is expired");
                None
            } else {
                Some(Session {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    claims: tokens.user_data,
                })
            }
        });

        if session.is_none() {
            if let Err(e) = self.store.clear() {
                tracing::error!("Failed to clear token store: {}", e);
            }
        }

        let mut state = self.state.write();
        state.session = session.clone();
        state.loaded = true;
        session
    }

    /// Authenticate against the backend
    ///
    /// On success the token pair and decoded claims are persisted and the
    /// session is installed. On failure the error is surfaced and neither
    /// the session nor the store is touched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let generation = self.state.read().generation;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.config.login_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            tracing::debug!("Login rejected: {}", err);
            return Err(err);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Internal(format!("malformed login response: {e}")))?;

        let claims = decode_claims(&body.token.access)?;
        let session = Session {
            access_token: body.token.access,
            refresh_token: body.token.refresh,
            claims: claims.clone(),
        };

        self.store.save(&StoredTokens {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            user_data: claims,
        })?;

        let mut state = self.state.write();
        if state.generation != generation {
            drop(state);
            tracing::warn!("Login completed after teardown, discarding result");
            if let Err(e) = self.store.clear() {
                tracing::error!("Failed to clear token store: {}", e);
            }
            return Err(AuthError::Internal("login superseded by logout".to_string()));
        }
        state.session = Some(session.clone());
        state.loaded = true;

        tracing::debug!(email = %session.email(), role = %session.role(), "Session established");
        Ok(session)
    }

    /// Tear down the session and clear durable storage
    ///
    /// Never fails; storage errors are logged and swallowed.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!("Failed to clear token store on logout: {}", e);
        }
        let mut state = self.state.write();
        state.session = None;
        state.loaded = true;
        state.generation += 1;
        tracing::debug!("Session torn down");
    }

    /// Exchange the refresh token for a new access token
    ///
    /// On success the new token is installed and persisted and the access
    /// token is returned. On any failure the manager behaves exactly as
    /// [`logout`](Self::logout) and returns the error so the caller sends
    /// the user back to login.
    pub async fn refresh(&self) -> Result<String, AuthError> {
        let (refresh_token, generation) = {
            let state = self.state.read();
            match &state.session {
                Some(session) => (session.refresh_token.clone(), state.generation),
                None => return Err(AuthError::InvalidToken),
            }
        };

        match self.try_refresh(&refresh_token).await {
            Ok((access_token, rotated_refresh, claims)) => {
                let refresh_token = rotated_refresh.unwrap_or(refresh_token);
                let session = Session {
                    access_token: access_token.clone(),
                    refresh_token: refresh_token.clone(),
                    claims: claims.clone(),
                };

                if let Err(e) = self.store.save(&StoredTokens {
                    access_token,
                    refresh_token,
                    user_data: claims,
                }) {
                    tracing::warn!("Refresh persisted nothing, tearing down: {}", e);
                    self.logout();
                    return Err(e);
                }

                let mut state = self.state.write();
                if state.generation != generation {
                    drop(state);
                    tracing::warn!("Refresh completed after teardown, discarding result");
                    if let Err(e) = self.store.clear() {
                        tracing::error!("Failed to clear token store: {}", e);
                    }
                    return Err(AuthError::Internal(
                        "refresh superseded by logout".to_string(),
                    ));
                }
                let access = session.access_token.clone();
                state.session = Some(session);
                Ok(access)
            }
            Err(e) => {
                tracing::warn!("Token refresh failed, tearing down session: {}", e);
                self.logout();
                Err(e)
            }
        }
    }

    async fn try_refresh(
        &self,
        refresh_token: &str,
    ) -> Result<(String, Option<String>, Claims), AuthError> {
        let request = RefreshRequest {
            refresh: refresh_token.to_string(),
        };

        let response = self
            .http
            .post(self.config.refresh_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Internal(format!("malformed refresh response: {e}")))?;

        let claims = decode_claims(&body.access)?;
        Ok((body.access, body.refresh, claims))
    }

    /// Create a new account
    ///
    /// Does not mutate the session; the caller logs in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AuthError> {
        let response = self
            .http
            .post(self.config.register_url())
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::Internal(format!("malformed register response: {e}")))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current session, if authenticated
    pub fn current(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    /// Current access token, if authenticated
    pub fn access_token(&self) -> Option<String> {
        self.state
            .read()
            .session
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    /// Current role, if authenticated
    pub fn role(&self) -> Option<Role> {
        self.state.read().session.as_ref().map(Session::role)
    }

    /// Whether a session is present
    pub fn is_authenticated(&self) -> bool {
        self.state.read().session.is_some()
    }

    /// Whether startup loading has completed
    pub fn is_loaded(&self) -> bool {
        self.state.read().loaded
    }

    // =========================================================================
    // Error mapping
    // =========================================================================

    /// Map a non-success backend response onto the auth error taxonomy
    async fn error_from_response(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        let detail = extract_detail(&body);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            AuthError::InvalidCredentials(detail)
        } else if status.is_client_error() {
            AuthError::Validation(detail)
        } else {
            AuthError::Internal(format!("backend returned {status}: {detail}"))
        }
    }
}

/// Extract a user-facing message from a DRF error body
///
/// Handles both `{"detail": "..."}` and per-field error maps
/// (`{"email": ["msg", ...]}`).
fn extract_detail(body: &serde_json::Value) -> String {
    if let Some(detail) = body.get("detail").and_then(serde_json::Value::as_str) {
        return detail.to_string();
    }

    if let Some(map) = body.as_object() {
        let parts: Vec<String> = map
            .iter()
            .filter_map(|(field, value)| {
                let messages = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(serde_json::Value::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => return None,
                };
                if messages.is_empty() {
                    None
                } else {
                    Some(format!("{field}: {messages}"))
                }
            })
            .collect();
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    "request failed".to_string()
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;

    fn test_config() -> AuthConfig {
        AuthConfig::new("http://127.0.0.1:1/api", "/nonexistent/tokens.json")
    }

    fn claims(exp: i64) -> Claims {
        Claims {
            user_id: Some(42),
            email: "budi@student.prasetiyamulya.ac.id".to_string(),
            full_name: "Budi Santoso".to_string(),
            role: Role::Student,
            major: Some("DBT".to_string()),
            iat: None,
            exp,
        }
    }

    fn manager_with_stored(exp: i64) -> (SessionManager, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::new());
        store
            .save(&StoredTokens {
                access_token: "stored.access.token".to_string(),
                refresh_token: "stored-refresh".to_string(),
                user_data: claims(exp),
            })
            .unwrap();
        let manager = SessionManager::with_store(test_config(), store.clone());
        (manager, store)
    }

    #[test]
    fn test_load_from_storage_with_valid_token() {
        let future_exp = Utc::now().timestamp() + 3600;
        let (manager, _store) = manager_with_stored(future_exp);

        assert!(!manager.is_loaded());
        let session = manager.load_from_storage().unwrap();

        assert!(manager.is_loaded());
        assert!(manager.is_authenticated());
        assert_eq!(session.role(), Role::Student);
        assert_eq!(manager.access_token().as_deref(), Some("stored.access.token"));
    }

    #[test]
    fn test_load_from_storage_with_expired_token() {
        let past_exp = Utc::now().timestamp() - 3600;
        let (manager, store) = manager_with_stored(past_exp);

        assert!(manager.load_from_storage().is_none());

        // Loaded, unauthenticated, and storage wiped
        assert!(manager.is_loaded());
        assert!(!manager.is_authenticated());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_from_storage_empty() {
        let store = Arc::new(MemoryTokenStore::new());
        let manager = SessionManager::with_store(test_config(), store);

        assert!(manager.load_from_storage().is_none());
        assert!(manager.is_loaded());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session_and_store() {
        let future_exp = Utc::now().timestamp() + 3600;
        let (manager, store) = manager_with_stored(future_exp);
        manager.load_from_storage();
        assert!(manager.is_authenticated());

        manager.logout();

        assert!(!manager.is_authenticated());
        assert!(store.load().unwrap().is_none());
        // Logout followed by a reload still yields an empty session
        assert!(manager.load_from_storage().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = Arc::new(MemoryTokenStore::new());
        let manager = SessionManager::with_store(test_config(), store);
        manager.logout();
        manager.logout();
        assert!(!manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_refresh_without_session_fails_fast() {
        let store = Arc::new(MemoryTokenStore::new());
        let manager = SessionManager::with_store(test_config(), store);

        let result = manager.refresh().await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_extract_detail_variants() {
        let detail = serde_json::json!({"detail": "No active account found"});
        assert_eq!(extract_detail(&detail), "No active account found");

        let fields = serde_json::json!({
            "email": ["Email sudah terdaftar."],
            "password_confirmation": ["Password tidak sama"]
        });
        let msg = extract_detail(&fields);
        assert!(msg.contains("email: Email sudah terdaftar."));
        assert!(msg.contains("password_confirmation: Password tidak sama"));

        assert_eq!(extract_detail(&serde_json::Value::Null), "request failed");
    }
}
