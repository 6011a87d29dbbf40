//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the acting user from a JWT Bearer token.
//! - [`rbac::RequireEditor`] -- Requires `editor` or `admin` role.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
