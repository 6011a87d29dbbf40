//! Domain logic for the OnAir back office.
//!
//! Pure types and rules with no I/O. Persistence lives in `onair_db`, the
//! HTTP surface in `onair_api`.

pub mod content;
pub mod error;
pub mod lifecycle;
pub mod roles;
pub mod types;
