//! Shared test helpers: backend-shaped JWTs and response bodies

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

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

/// Login response body as the backend emits it
pub fn login_body(access: &str, refresh: &str) -> serde_json::Value {
    serde_json::json!({
        "email": "budi@student.prasetiyamulya.ac.id",
        "username": null,
        "full_name": "Budi Santoso",
        "major": "DBT",
        "role": "MAHASISWA",
        "token": { "access": access, "refresh": refresh }
    })
}
