//! Campus Auth Core - Session lifecycle
//!
//! Core authentication functionality for the portal SDK: client-side token
//! decoding, durable token storage, the session manager, and role-based
//! route guarding.

pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod store;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use guard::{evaluate, GuardState, RedirectTarget, RouteGuard, RouteRequirement};
pub use session::{Session, SessionManager};
pub use store::{FileTokenStore, MemoryTokenStore, StoredTokens, TokenStore};
pub use token::{decode_claims, is_expired};
