//! Repository for the `events` table.

use onair_core::content::ContentType;
use onair_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::filters::ACTIVE_ONLY;
use crate::models::event::{CreateEvent, Event, UpdateEvent};

const COLUMNS: &str =
    "id, title, description, venue, starts_at, ends_at, protected, created_at, updated_at";

/// Provides CRUD operations for active events.
pub struct EventRepo;

impl EventRepo {
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, description, venue, starts_at, ends_at, protected)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.venue)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(
                input
                    .protected
                    .unwrap_or(ContentType::Events.protected_default()),
            )
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND {ACTIVE_ONLY}");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events in calendar order. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE {ACTIVE_ONLY} ORDER BY starts_at, id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List active events that have not finished by `from`.
    pub async fn list_upcoming(pool: &PgPool, from: Timestamp) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE COALESCE(ends_at, starts_at) >= $1 AND {ACTIVE_ONLY}
             ORDER BY starts_at, id"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(from)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Returns `None` if no active row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                venue = COALESCE($4, venue),
                starts_at = COALESCE($5, starts_at),
                ends_at = COALESCE($6, ends_at)
             WHERE id = $1 AND {ACTIVE_ONLY}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.venue)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_optional(pool)
            .await
    }
}
