//! Campus Types - Shared domain types
//!
//! This crate contains domain types used across the portal SDK:
//! - User identity, roles, and token claims
//! - Auth request/response wire types
//! - Catalog, academic, and grade records

pub mod academic;
pub mod auth;
pub mod catalog;
pub mod claims;
pub mod grade;
pub mod role;

pub use academic::*;
pub use auth::*;
pub use catalog::*;
pub use claims::*;
pub use grade::*;
pub use role::*;
