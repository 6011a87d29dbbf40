//! Repository for the `shows` table.

use onair_core::content::ContentType;
use onair_core::types::DbId;
use sqlx::PgPool;

use crate::filters::ACTIVE_ONLY;
use crate::models::show::{CreateShow, Show, UpdateShow};

const COLUMNS: &str =
    "id, title, slug, description, host_name, artwork_url, protected, created_at, updated_at";

/// Provides CRUD operations for active shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show. Shows default to protected.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (title, slug, description, host_name, artwork_url, protected)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.host_name)
            .bind(&input.artwork_url)
            .bind(
                input
                    .protected
                    .unwrap_or(ContentType::Shows.protected_default()),
            )
            .fetch_one(pool)
            .await
    }

    /// Find a show by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1 AND {ACTIVE_ONLY}");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List shows alphabetically. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE {ACTIVE_ONLY} ORDER BY title, id");
        sqlx::query_as::<_, Show>(&query).fetch_all(pool).await
    }

    /// Update a show. Returns `None` if no active row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShow,
    ) -> Result<Option<Show>, sqlx::Error> {
        let query = format!(
            "UPDATE shows SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                host_name = COALESCE($5, host_name),
                artwork_url = COALESCE($6, artwork_url)
             WHERE id = $1 AND {ACTIVE_ONLY}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.host_name)
            .bind(&input.artwork_url)
            .fetch_optional(pool)
            .await
    }
}
