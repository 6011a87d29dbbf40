//! Soft-delete and restore transitions for every content type.
//!
//! Each transition is a single conditional `UPDATE`, so `deleted_at` and
//! `deleted_by` always change together and concurrent callers serialise on
//! the row lock: of two racing restores exactly one matches the
//! `deleted_at IS NOT NULL` predicate. When the update matches nothing, a
//! follow-up read decides between `NotFound` and the state-mismatch error.

use chrono::Utc;
use onair_core::content::ContentType;
use onair_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::error::LifecycleError;
use crate::filters::{ACTIVE_ONLY, TRASHED_ONLY};
use crate::models::trash::LifecycleRow;

const LIFECYCLE_COLUMNS: &str = "id, title, protected, deleted_at, deleted_by";

/// Owns the lifecycle columns (`deleted_at`, `deleted_by`, `protected`).
pub struct LifecycleRepo;

impl LifecycleRepo {
    /// Move an active item to the trash on behalf of `actor_id`.
    pub async fn soft_delete(
        pool: &PgPool,
        content_type: ContentType,
        id: DbId,
        actor_id: DbId,
    ) -> Result<(), LifecycleError> {
        Self::soft_delete_at(pool, content_type, id, actor_id, Utc::now()).await
    }

    /// [`Self::soft_delete`] with an explicit deletion timestamp.
    pub async fn soft_delete_at(
        pool: &PgPool,
        content_type: ContentType,
        id: DbId,
        actor_id: DbId,
        at: Timestamp,
    ) -> Result<(), LifecycleError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = $2, deleted_by = $3 WHERE id = $1 AND {ACTIVE_ONLY}",
            content_type.table()
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(at)
            .bind(actor_id)
            .execute(pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    LifecycleError::UnknownActor { actor_id }
                }
                _ => LifecycleError::StoreUnavailable(e),
            })?;

        if result.rows_affected() > 0 {
            tracing::info!(%content_type, id, actor_id, "Moved content item to trash");
            return Ok(());
        }

        match Self::find_include_deleted(pool, content_type, id).await? {
            Some(_) => Err(LifecycleError::AlreadyDeleted { content_type, id }),
            None => Err(LifecycleError::NotFound { content_type, id }),
        }
    }

    /// Restore a trashed item, clearing `deleted_at` and `deleted_by`.
    ///
    /// A purged or never-existing item yields `NotFound`; an item that is
    /// already active (for example a retried restore) yields `AlreadyActive`.
    pub async fn restore(
        pool: &PgPool,
        content_type: ContentType,
        id: DbId,
    ) -> Result<(), LifecycleError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = NULL, deleted_by = NULL WHERE id = $1 AND {TRASHED_ONLY}",
            content_type.table()
        );
        let result = sqlx::query(&sql).bind(id).execute(pool).await?;

        if result.rows_affected() > 0 {
            tracing::info!(%content_type, id, "Restored content item from trash");
            return Ok(());
        }

        match Self::find_include_deleted(pool, content_type, id).await? {
            Some(_) => Err(LifecycleError::AlreadyActive { content_type, id }),
            None => Err(LifecycleError::NotFound { content_type, id }),
        }
    }

    /// Set the protection flag on an item, active or trashed.
    ///
    /// Changing the flag on a trashed item moves its purge deadline.
    pub async fn set_protected(
        pool: &PgPool,
        content_type: ContentType,
        id: DbId,
        protected: bool,
    ) -> Result<LifecycleRow, LifecycleError> {
        let sql = format!(
            "UPDATE {} SET protected = $2 WHERE id = $1 RETURNING {LIFECYCLE_COLUMNS}",
            content_type.table()
        );
        let row = sqlx::query_as::<_, LifecycleRow>(&sql)
            .bind(id)
            .bind(protected)
            .fetch_optional(pool)
            .await?
            .ok_or(LifecycleError::NotFound { content_type, id })?;

        tracing::info!(%content_type, id, protected, "Updated content protection");
        Ok(row)
    }

    /// Read the lifecycle columns of an item regardless of its state.
    pub async fn find_include_deleted(
        pool: &PgPool,
        content_type: ContentType,
        id: DbId,
    ) -> Result<Option<LifecycleRow>, sqlx::Error> {
        let sql = format!(
            "SELECT {LIFECYCLE_COLUMNS} FROM {} WHERE id = $1",
            content_type.table()
        );
        sqlx::query_as::<_, LifecycleRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
