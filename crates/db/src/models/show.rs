//! Show entity model and DTOs.

use onair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An active row from the `shows` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub host_name: Option<String>,
    pub artwork_url: Option<String>,
    pub protected: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new show.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShow {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: String,
    pub description: Option<String>,
    pub host_name: Option<String>,
    #[validate(url)]
    pub artwork_url: Option<String>,
    /// Shows are protected unless explicitly opted out.
    pub protected: Option<bool>,
}

/// DTO for updating an existing show. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateShow {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub host_name: Option<String>,
    #[validate(url)]
    pub artwork_url: Option<String>,
}
