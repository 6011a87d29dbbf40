//! Trash listing, purge preview, and purge report types.

use indexmap::IndexMap;
use onair_core::content::ContentType;
use onair_core::error::CoreError;
use onair_core::lifecycle::{lifecycle_state, LifecycleState};
use onair_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Lifecycle columns of a content row, whatever its state.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct LifecycleRow {
    pub id: DbId,
    pub title: String,
    pub protected: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
}

impl LifecycleRow {
    pub fn state(&self) -> Result<LifecycleState, CoreError> {
        lifecycle_state(self.deleted_at, self.deleted_by)
    }
}

/// A single soft-deleted item in the trash view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrashedItem {
    pub id: DbId,
    pub content_type: ContentType,
    pub title: String,
    pub deleted_at: Timestamp,
    /// Display identity (email) of the deleting actor.
    pub deleted_by: Option<String>,
    pub deleted_by_id: DbId,
    pub protected: bool,
    /// When the item becomes eligible for permanent purge.
    pub purge_after: Timestamp,
}

/// Trash contents grouped by content type, in [`ContentType::ALL`] order.
pub type TrashListing = IndexMap<ContentType, Vec<TrashedItem>>;

/// Per-type counts of trashed rows and rows already past retention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurgeCount {
    pub content_type: ContentType,
    pub trashed: i64,
    pub eligible: i64,
}

/// Preview of what the next purge sweep would remove.
#[derive(Debug, Clone, Serialize)]
pub struct PurgePreview {
    pub as_of: Timestamp,
    pub counts_by_type: Vec<PurgeCount>,
    pub total_trashed: i64,
    pub total_eligible: i64,
}

/// Outcome of one purge sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeReport {
    pub purged_by_type: IndexMap<ContentType, u64>,
    pub total_purged: u64,
}

impl PurgeReport {
    pub fn purged(&self, content_type: ContentType) -> u64 {
        self.purged_by_type.get(&content_type).copied().unwrap_or(0)
    }
}
