//! Campus Client - REST client for the portal backend
//!
//! Wraps the backend's catalog and academic endpoints with bearer-token
//! authorization. The client holds the session manager, attaches the
//! current access token to every request, and on a rejected token performs
//! one refresh-and-replay before reporting an auth failure.

pub mod academic;
pub mod books;
pub mod config;
pub mod error;
pub mod grades;
pub mod http;

pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, Result};
pub use http::ApiClient;
