//! Durable token storage
//!
//! Persists the token pair and decoded claims between runs. The layout
//! matches the browser client's key-value storage: `access_token`,
//! `refresh_token`, and `user_data` (claims as a serialized JSON string).
//!
//! The store is a mirror of the session manager's state, never an
//! independent owner: only the session manager writes it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use campus_types::Claims;

use crate::AuthError;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the serialized claims
pub const USER_DATA_KEY: &str = "user_data";

/// Persisted session tokens and claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTokens {
    /// Access token (JWT)
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
    /// Decoded claims from the access token
    pub user_data: Claims,
}

/// Durable token storage
pub trait TokenStore: Send + Sync {
    /// Load persisted tokens, if any
    fn load(&self) -> Result<Option<StoredTokens>, AuthError>;

    /// Persist the given tokens, replacing any previous entry
    fn save(&self, tokens: &StoredTokens) -> Result<(), AuthError>;

    /// Remove all persisted entries
    fn clear(&self) -> Result<(), AuthError>;
}

/// File-backed token store
///
/// Stores the three entries as a single JSON object at a fixed path. A
/// corrupt or partial file is treated as absent: it is logged, wiped, and
/// `load` returns `None` so startup falls back to the login flow.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(raw: &str) -> Option<StoredTokens> {
        let map: BTreeMap<String, String> = serde_json::from_str(raw).ok()?;
        let access_token = map.get(ACCESS_TOKEN_KEY)?.clone();
        let refresh_token = map.get(REFRESH_TOKEN_KEY)?.clone();
        let user_data: Claims = serde_json::from_str(map.get(USER_DATA_KEY)?).ok()?;
        Some(StoredTokens {
            access_token,
            refresh_token,
            user_data,
        })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredTokens>, AuthError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::error!("Failed to read token store {}: {}", self.path.display(), e);
                return Err(AuthError::Storage(e.to_string()));
            }
        };

        match Self::parse(&raw) {
            Some(tokens) => Ok(Some(tokens)),
            None => {
                tracing::warn!(
                    "Token store {} is corrupt, clearing it",
                    self.path.display()
                );
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&self, tokens: &StoredTokens) -> Result<(), AuthError> {
        let user_data = serde_json::to_string(&tokens.user_data)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let mut map = BTreeMap::new();
        map.insert(ACCESS_TOKEN_KEY, tokens.access_token.as_str());
        map.insert(REFRESH_TOKEN_KEY, tokens.refresh_token.as_str());
        map.insert(USER_DATA_KEY, user_data.as_str());

        let raw =
            serde_json::to_string_pretty(&map).map_err(|e| AuthError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AuthError::Storage(e.to_string()))?;
        }
        std::fs::write(&self.path, raw).map_err(|e| {
            tracing::error!("Failed to write token store {}: {}", self.path.display(), e);
            AuthError::Storage(e.to_string())
        })
    }

    fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!("Failed to clear token store {}: {}", self.path.display(), e);
                Err(AuthError::Storage(e.to_string()))
            }
        }
    }
}

/// In-memory token store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<StoredTokens>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<StoredTokens>, AuthError> {
        Ok(self.inner.lock().clone())
    }

    fn save(&self, tokens: &StoredTokens) -> Result<(), AuthError> {
        *self.inner.lock() = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.inner.lock() = None;
        Ok(())
    }
}
