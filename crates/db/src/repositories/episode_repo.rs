//! Repository for the `episodes` table.

use onair_core::content::ContentType;
use onair_core::types::DbId;
use sqlx::PgPool;

use crate::filters::ACTIVE_ONLY;
use crate::models::episode::{CreateEpisode, Episode, UpdateEpisode};

const COLUMNS: &str = "id, show_id, title, description, audio_url, duration_secs, aired_at, \
                       protected, created_at, updated_at";

/// Provides CRUD operations for active episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes
                (show_id, title, description, audio_url, duration_secs, aired_at, protected)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.show_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.audio_url)
            .bind(input.duration_secs)
            .bind(input.aired_at)
            .bind(
                input
                    .protected
                    .unwrap_or(ContentType::Episodes.protected_default()),
            )
            .fetch_one(pool)
            .await
    }

    /// Find an episode by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1 AND {ACTIVE_ONLY}");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List episodes, most recently aired first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes WHERE {ACTIVE_ONLY}
             ORDER BY aired_at DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, Episode>(&query).fetch_all(pool).await
    }

    /// List the active episodes of one show.
    pub async fn list_by_show(pool: &PgPool, show_id: DbId) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes WHERE show_id = $1 AND {ACTIVE_ONLY}
             ORDER BY aired_at DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(show_id)
            .fetch_all(pool)
            .await
    }

    /// Update an episode. Returns `None` if no active row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                audio_url = COALESCE($4, audio_url),
                duration_secs = COALESCE($5, duration_secs),
                aired_at = COALESCE($6, aired_at)
             WHERE id = $1 AND {ACTIVE_ONLY}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.audio_url)
            .bind(input.duration_secs)
            .bind(input.aired_at)
            .fetch_optional(pool)
            .await
    }
}
