//! Repository for the `resources` table.

use onair_core::content::ContentType;
use onair_core::types::DbId;
use sqlx::PgPool;

use crate::filters::ACTIVE_ONLY;
use crate::models::resource::{CreateResource, Resource, UpdateResource};

const COLUMNS: &str = "id, title, description, url, category, protected, created_at, updated_at";

/// Provides CRUD operations for active resources.
pub struct ResourceRepo;

impl ResourceRepo {
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (title, description, url, category, protected)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.category)
            .bind(
                input
                    .protected
                    .unwrap_or(ContentType::Resources.protected_default()),
            )
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1 AND {ACTIVE_ONLY}");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List resources grouped by category. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources WHERE {ACTIVE_ONLY}
             ORDER BY category NULLS LAST, title, id"
        );
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                url = COALESCE($4, url),
                category = COALESCE($5, category)
             WHERE id = $1 AND {ACTIVE_ONLY}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }
}
