//! Domain model structs and DTOs.
//!
//! Each content submodule contains:
//! - A `FromRow` + `Serialize` entity struct for active rows
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod article;
pub mod content;
pub mod episode;
pub mod event;
pub mod resource;
pub mod show;
pub mod trash;
pub mod user;
