//! Episode entity model and DTOs.

use onair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An active row from the `episodes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    /// `None` once the parent show has been purged.
    pub show_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub audio_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub aired_at: Option<Timestamp>,
    pub protected: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new episode.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEpisode {
    pub show_id: DbId,
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub audio_url: Option<String>,
    #[validate(range(min = 0))]
    pub duration_secs: Option<i32>,
    pub aired_at: Option<Timestamp>,
    pub protected: Option<bool>,
}

/// DTO for updating an existing episode. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEpisode {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub audio_url: Option<String>,
    #[validate(range(min = 0))]
    pub duration_secs: Option<i32>,
    pub aired_at: Option<Timestamp>,
}
