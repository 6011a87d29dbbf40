//! Cross-type reads over every content table.

use onair_core::content::ContentType;
use onair_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::filters::ACTIVE_ONLY;
use crate::models::content::RecentItem;

#[derive(FromRow)]
struct RecentRow {
    content_type: String,
    id: DbId,
    title: String,
    updated_at: Timestamp,
}

/// Provides queries spanning all five content types.
pub struct ContentRepo;

impl ContentRepo {
    /// Most recently updated active items across all content types.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<RecentItem>, sqlx::Error> {
        let unions: Vec<String> = ContentType::ALL
            .iter()
            .map(|ct| {
                format!(
                    "SELECT '{tag}'::text AS content_type, id, title, updated_at \
                     FROM {table} WHERE {ACTIVE_ONLY}",
                    tag = ct.as_str(),
                    table = ct.table(),
                )
            })
            .collect();
        let sql = format!(
            "{} ORDER BY updated_at DESC, id DESC LIMIT $1",
            unions.join(" UNION ALL ")
        );

        let rows = sqlx::query_as::<_, RecentRow>(&sql)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let content_type = row
                    .content_type
                    .parse::<ContentType>()
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
                Ok(RecentItem {
                    content_type,
                    id: row.id,
                    title: row.title,
                    updated_at: row.updated_at,
                })
            })
            .collect()
    }
}
