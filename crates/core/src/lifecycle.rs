//! Soft-delete lifecycle and retention rules.
//!
//! An item is `Active` while `deleted_at` is null and `Deleted` once it has
//! been moved to the trash. Deleted items stay restorable for a retention
//! window (30 days, or 60 for protected content); after that the purge sweep
//! removes them permanently. Everything here is a pure function of its
//! arguments so the database layer can compute SQL cutoffs from the same rules.

use chrono::Duration;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Retention window for ordinary content.
pub const STANDARD_RETENTION_DAYS: i64 = 30;

/// Retention window for protected content.
pub const PROTECTED_RETENTION_DAYS: i64 = 60;

/// Lifecycle state of a stored content row. `Purged` rows no longer exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Active,
    Deleted,
}

/// Classify a row from its lifecycle columns.
///
/// Rejects rows where only one of `deleted_at` / `deleted_by` is set.
pub fn lifecycle_state(
    deleted_at: Option<Timestamp>,
    deleted_by: Option<DbId>,
) -> Result<LifecycleState, CoreError> {
    match (deleted_at, deleted_by) {
        (None, None) => Ok(LifecycleState::Active),
        (Some(_), Some(_)) => Ok(LifecycleState::Deleted),
        (Some(_), None) => Err(CoreError::Internal(
            "deleted_at is set without deleted_by".into(),
        )),
        (None, Some(_)) => Err(CoreError::Internal(
            "deleted_by is set without deleted_at".into(),
        )),
    }
}

/// How long a deleted item remains restorable.
pub fn retention_window(protected: bool) -> Duration {
    if protected {
        Duration::days(PROTECTED_RETENTION_DAYS)
    } else {
        Duration::days(STANDARD_RETENTION_DAYS)
    }
}

/// The instant from which a deleted item may be purged.
pub fn purge_deadline(deleted_at: Timestamp, protected: bool) -> Timestamp {
    deleted_at + retention_window(protected)
}

/// Returns `true` once `now` has reached the item's purge deadline.
pub fn is_purge_eligible(deleted_at: Timestamp, protected: bool, now: Timestamp) -> bool {
    now >= purge_deadline(deleted_at, protected)
}

/// Latest `deleted_at` that is purge-eligible at `now`.
///
/// `deleted_at <= purge_cutoff(now, p)` is equivalent to
/// `is_purge_eligible(deleted_at, p, now)`.
pub fn purge_cutoff(now: Timestamp, protected: bool) -> Timestamp {
    now - retention_window(protected)
}
