//! HTTP dispatch with bearer authorization
//!
//! All endpoint wrappers funnel through [`ApiClient::dispatch`]: attach the
//! current access token, send, and on a 401 perform one token refresh and
//! replay. A second rejection tears the session down, so every auth failure
//! surfaces as [`ClientError::Auth`] with an already-empty session behind it.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use campus_auth_core::SessionManager;

use crate::{ClientConfig, ClientError, Result};

/// Portal API client
///
/// Cheap to clone; the HTTP connection pool and session manager are shared.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Create a client over the given session manager
    pub fn new(config: ClientConfig, session: Arc<SessionManager>) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client, timeouts not applied: {}", e);
                reqwest::Client::new()
            });

        Self::with_client(config, session, http)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(
        config: ClientConfig,
        session: Arc<SessionManager>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            config,
            http,
            session,
        }
    }

    /// The session manager this client authenticates with
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn send_once(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Send a request, refreshing and replaying once on a rejected token
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let response = self.send_once(&method, path, query, body).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check(response).await;
        }

        tracing::debug!(%path, "Access token rejected, refreshing");
        // The manager tears the session down itself when refresh fails
        self.session.refresh().await?;

        let replay = self.send_once(&method, path, query, body).await?;
        if replay.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(%path, "Replay rejected after refresh, tearing down session");
            self.session.logout();
            let detail = Self::error_detail(replay).await;
            return Err(ClientError::Auth(detail));
        }
        Self::check(replay).await
    }

    /// Map non-success statuses onto the error taxonomy
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        if status.is_client_error() {
            let (detail, fields) = parse_drf_errors(&body);
            Err(ClientError::Validation {
                status: status.as_u16(),
                detail,
                fields,
            })
        } else {
            let (detail, _) = parse_drf_errors(&body);
            Err(ClientError::Unknown(format!("{status}: {detail}")))
        }
    }

    async fn error_detail(response: reqwest::Response) -> String {
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        parse_drf_errors(&body).0
    }

    // =========================================================================
    // Typed helpers used by the endpoint wrappers
    // =========================================================================

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.dispatch(Method::GET, path, query, None).await?;
        Self::parse(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self.dispatch(Method::POST, path, &[], Some(body)).await?;
        Self::parse(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self.dispatch(Method::PUT, path, &[], Some(body)).await?;
        Self::parse(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Unknown(format!("malformed response body: {e}")))
    }
}

/// Split a DRF error body into a summary line and per-field messages
///
/// Handles `{"detail": "..."}` and `{"field": ["msg", ...]}` shapes.
fn parse_drf_errors(body: &serde_json::Value) -> (String, BTreeMap<String, Vec<String>>) {
    let mut fields = BTreeMap::new();

    if let Some(detail) = body.get("detail").and_then(serde_json::Value::as_str) {
        return (detail.to_string(), fields);
    }

    if let Some(map) = body.as_object() {
        for (field, value) in map {
            let messages: Vec<String> = match value {
                serde_json::Value::String(s) => vec![s.clone()],
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .map(str::to_string)
                    .collect(),
                _ => continue,
            };
            if !messages.is_empty() {
                fields.insert(field.clone(), messages);
            }
        }
    }

    let detail = if fields.is_empty() {
        "request failed".to_string()
    } else {
        fields
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    };

    (detail, fields)
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
