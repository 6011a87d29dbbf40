//! Event entity model and DTOs.

use onair_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An active row from the `events` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub protected: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub protected: Option<bool>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEvent {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}
