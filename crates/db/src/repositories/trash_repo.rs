//! Repository for cross-table trash operations.
//!
//! Provides the grouped trash view (with the deleting actor resolved to a
//! display identity), a purge preview, and the batched retention sweep that
//! permanently removes items whose retention window has elapsed.

use onair_core::content::ContentType;
use onair_core::lifecycle::{purge_cutoff, purge_deadline};
use onair_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::filters::TRASHED_ONLY;
use crate::models::trash::{PurgeCount, PurgePreview, PurgeReport, TrashListing, TrashedItem};

/// Rows past their retention window. `$1` is the cutoff for unprotected
/// rows, `$2` the cutoff for protected rows.
const PURGE_ELIGIBLE: &str =
    "((NOT protected AND deleted_at <= $1) OR (protected AND deleted_at <= $2))";

#[derive(FromRow)]
struct TrashedRow {
    id: DbId,
    title: String,
    protected: bool,
    deleted_at: Timestamp,
    deleted_by_id: DbId,
    deleted_by: Option<String>,
}

#[derive(FromRow)]
struct CountRow {
    trashed: i64,
    eligible: i64,
}

/// Provides cross-table trash operations.
pub struct TrashRepo;

impl TrashRepo {
    // ── Listing ───────────────────────────────────────────────────────

    /// List soft-deleted items grouped by content type.
    ///
    /// With no filter every content type is present (empty groups included),
    /// in [`ContentType::ALL`] order. Items are ordered most recently
    /// deleted first.
    pub async fn list_trash(
        pool: &PgPool,
        filter: Option<ContentType>,
    ) -> Result<TrashListing, sqlx::Error> {
        let types: Vec<ContentType> = match filter {
            Some(ct) => vec![ct],
            None => ContentType::ALL.to_vec(),
        };

        let mut listing = TrashListing::with_capacity(types.len());
        for ct in types {
            let items = Self::list_trashed_single(pool, ct).await?;
            listing.insert(ct, items);
        }
        Ok(listing)
    }

    /// Query a single content table for soft-deleted rows.
    async fn list_trashed_single(
        pool: &PgPool,
        content_type: ContentType,
    ) -> Result<Vec<TrashedItem>, sqlx::Error> {
        let sql = format!(
            "SELECT c.id, c.title, c.protected, c.deleted_at, \
                    c.deleted_by AS deleted_by_id, u.email AS deleted_by \
             FROM {table} c \
             LEFT JOIN users u ON u.id = c.deleted_by \
             WHERE c.{TRASHED_ONLY} \
             ORDER BY c.deleted_at DESC, c.id DESC",
            table = content_type.table()
        );
        let rows = sqlx::query_as::<_, TrashedRow>(&sql).fetch_all(pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| TrashedItem {
                id: row.id,
                content_type,
                title: row.title,
                deleted_at: row.deleted_at,
                deleted_by: row.deleted_by,
                deleted_by_id: row.deleted_by_id,
                protected: row.protected,
                purge_after: purge_deadline(row.deleted_at, row.protected),
            })
            .collect())
    }

    // ── Purge preview ─────────────────────────────────────────────────

    /// Count trashed rows per content type and how many of them the purge
    /// sweep would remove at `now`.
    pub async fn purge_preview(pool: &PgPool, now: Timestamp) -> Result<PurgePreview, sqlx::Error> {
        let standard_cutoff = purge_cutoff(now, false);
        let protected_cutoff = purge_cutoff(now, true);

        let mut counts_by_type = Vec::with_capacity(ContentType::ALL.len());
        let mut total_trashed = 0;
        let mut total_eligible = 0;

        for ct in ContentType::ALL {
            let sql = format!(
                "SELECT COUNT(*) AS trashed, \
                        COUNT(*) FILTER (WHERE {PURGE_ELIGIBLE}) AS eligible \
                 FROM {table} WHERE {TRASHED_ONLY}",
                table = ct.table()
            );
            let counts = sqlx::query_as::<_, CountRow>(&sql)
                .bind(standard_cutoff)
                .bind(protected_cutoff)
                .fetch_one(pool)
                .await?;

            total_trashed += counts.trashed;
            total_eligible += counts.eligible;
            counts_by_type.push(PurgeCount {
                content_type: ct,
                trashed: counts.trashed,
                eligible: counts.eligible,
            });
        }

        Ok(PurgePreview {
            as_of: now,
            counts_by_type,
            total_trashed,
            total_eligible,
        })
    }

    // ── Purge sweep ───────────────────────────────────────────────────

    /// Permanently delete every trashed row whose retention window has
    /// elapsed at `now`.
    ///
    /// Each content type is processed in batches of at most `batch_size`
    /// rows, one short transaction per batch. Rows locked by a concurrent
    /// restore are skipped and picked up by a later sweep if still eligible.
    pub async fn purge_expired(
        pool: &PgPool,
        now: Timestamp,
        batch_size: i64,
    ) -> Result<PurgeReport, sqlx::Error> {
        let batch_size = batch_size.max(1);
        let standard_cutoff = purge_cutoff(now, false);
        let protected_cutoff = purge_cutoff(now, true);

        let mut report = PurgeReport::default();
        for ct in ContentType::ALL {
            let mut purged: u64 = 0;
            loop {
                let (selected, deleted) =
                    Self::purge_batch(pool, ct, standard_cutoff, protected_cutoff, batch_size)
                        .await?;
                purged += deleted;
                if selected < batch_size as usize {
                    break;
                }
            }

            if purged > 0 {
                tracing::info!(content_type = %ct, purged, "Purged expired trash");
            }
            report.purged_by_type.insert(ct, purged);
            report.total_purged += purged;
        }
        Ok(report)
    }

    /// Lock and delete one batch of eligible rows.
    ///
    /// Returns `(rows selected, rows deleted)`. The delete re-checks the
    /// lifecycle predicate so a row restored in the meantime survives.
    async fn purge_batch(
        pool: &PgPool,
        content_type: ContentType,
        standard_cutoff: Timestamp,
        protected_cutoff: Timestamp,
        batch_size: i64,
    ) -> Result<(usize, u64), sqlx::Error> {
        let table = content_type.table();
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT id FROM {table} \
             WHERE {TRASHED_ONLY} AND {PURGE_ELIGIBLE} \
             ORDER BY deleted_at, id \
             LIMIT $3 \
             FOR UPDATE SKIP LOCKED"
        );
        let ids: Vec<DbId> = sqlx::query_scalar(&select)
            .bind(standard_cutoff)
            .bind(protected_cutoff)
            .bind(batch_size)
            .fetch_all(&mut *tx)
            .await?;

        if ids.is_empty() {
            tx.commit().await?;
            return Ok((0, 0));
        }

        let delete = format!(
            "DELETE FROM {table} \
             WHERE id = ANY($3) AND {TRASHED_ONLY} AND {PURGE_ELIGIBLE}"
        );
        let result = sqlx::query(&delete)
            .bind(standard_cutoff)
            .bind(protected_cutoff)
            .bind(&ids)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(
            content_type = %content_type,
            selected = ids.len(),
            deleted = result.rows_affected(),
            "Purge batch committed"
        );
        Ok((ids.len(), result.rows_affected()))
    }
}
