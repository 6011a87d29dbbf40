//! Repository for the `articles` table.

use onair_core::content::ContentType;
use onair_core::types::DbId;
use sqlx::PgPool;

use crate::filters::ACTIVE_ONLY;
use crate::models::article::{Article, CreateArticle, UpdateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, slug, summary, body, published_at, protected, created_at, updated_at";

/// Provides CRUD operations for active articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, slug, summary, body, published_at, protected)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.summary)
            .bind(&input.body)
            .bind(input.published_at)
            .bind(
                input
                    .protected
                    .unwrap_or(ContentType::Articles.protected_default()),
            )
            .fetch_one(pool)
            .await
    }

    /// Find an article by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1 AND {ACTIVE_ONLY}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List articles, newest publication first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles WHERE {ACTIVE_ONLY}
             ORDER BY COALESCE(published_at, created_at) DESC, id DESC"
        );
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Update an article. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                summary = COALESCE($4, summary),
                body = COALESCE($5, body),
                published_at = COALESCE($6, published_at)
             WHERE id = $1 AND {ACTIVE_ONLY}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.summary)
            .bind(&input.body)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }
}
