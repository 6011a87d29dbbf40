//! Resource (downloadable / linked material) entity model and DTOs.

use onair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An active row from the `resources` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub category: Option<String>,
    pub protected: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new resource.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResource {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub url: String,
    pub category: Option<String>,
    pub protected: Option<bool>,
}

/// DTO for updating an existing resource. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateResource {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub category: Option<String>,
}
