//! Errors raised by lifecycle transitions.

use onair_core::content::ContentType;
use onair_core::types::DbId;

/// Failure of a soft-delete or restore.
///
/// `AlreadyDeleted` / `AlreadyActive` are reported separately from
/// `NotFound` so callers can treat a retried restore as success.
/// `StoreUnavailable` is reserved for the database itself failing.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("{} with id {id} not found", content_type.entity_name())]
    NotFound { content_type: ContentType, id: DbId },

    #[error("{} with id {id} is already in the trash", content_type.entity_name())]
    AlreadyDeleted { content_type: ContentType, id: DbId },

    /// The item is already active. A retried restore lands here and can be
    /// treated as success: the item is live either way.
    #[error("{} with id {id} is not in the trash", content_type.entity_name())]
    AlreadyActive { content_type: ContentType, id: DbId },

    /// The acting user has no row in the local user projection.
    #[error("Actor {actor_id} is not a known user")]
    UnknownActor { actor_id: DbId },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}
