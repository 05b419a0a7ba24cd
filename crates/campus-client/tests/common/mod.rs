//! Shared test helpers: signed tokens and pre-authenticated sessions

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use campus_auth_core::{AuthConfig, MemoryTokenStore, SessionManager, StoredTokens, TokenStore};
use campus_client::{ApiClient, ClientConfig};
use campus_types::{Claims, Role};

/// Sign a backend-shaped access token
///
/// The SDK never verifies signatures, so any signing secret works; what
/// matters is the claim payload shape.
pub fn make_access_token(role: &str, exp: i64) -> String {
    let claims = serde_json::json!({
        "token_type": "access",
        "exp": exp,
        "iat": exp - 3600,
        "jti": "test-jti",
        "user_id": 42,
        "email": "budi@student.prasetiyamulya.ac.id",
        "full_name": "Budi Santoso",
        "major": "DBT",
        "role": role,
    });
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-signing-secret"),
    )
    .expect("token encoding")
}

fn claims(role: Role, exp: i64) -> Claims {
    Claims {
        user_id: Some(42),
        email: "budi@student.prasetiyamulya.ac.id".to_string(),
        full_name: "Budi Santoso".to_string(),
        role,
        major: Some("DBT".to_string()),
        iat: Some(exp - 3600),
        exp,
    }
}

/// An API client over an already-authenticated session
///
/// Seeds an in-memory token store with the given tokens, loads the session
/// from it, and points both the auth and API layers at the mock server.
pub fn authenticated_client(
    server_uri: &str,
    role: Role,
    access: &str,
    refresh: &str,
) -> (ApiClient, Arc<SessionManager>, Arc<MemoryTokenStore>) {
    let exp = chrono::Utc::now().timestamp() + 3600;
    let store = Arc::new(MemoryTokenStore::new());
    store
        .save(&StoredTokens {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            user_data: claims(role, exp),
        })
        .expect("seed store");

    let auth_config = AuthConfig::new(format!("{server_uri}/api"), "/nonexistent/tokens.json");
    let manager = Arc::new(SessionManager::with_store(auth_config, store.clone()));
    manager.load_from_storage().expect("seeded session");

    let client = ApiClient::new(ClientConfig::new(server_uri), manager.clone());
    (client, manager, store)
}
