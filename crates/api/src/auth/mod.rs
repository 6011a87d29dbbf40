//! Access-token handling.
//!
//! Tokens are issued by the external identity provider; this service only
//! validates them and reads the actor id and role.

pub mod jwt;
