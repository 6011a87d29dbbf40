//! Article entity model and DTOs.

use onair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An active row from the `articles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub body: String,
    pub published_at: Option<Timestamp>,
    pub protected: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticle {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub published_at: Option<Timestamp>,
    /// Defaults to the content type's protection default if omitted.
    pub protected: Option<bool>,
}

/// DTO for updating an existing article. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateArticle {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub published_at: Option<Timestamp>,
}
