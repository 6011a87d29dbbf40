//! Shared lifecycle predicates.
//!
//! Every public or default admin query over a content table must include
//! [`ACTIVE_ONLY`]; only trash and purge queries use [`TRASHED_ONLY`].
//! Keeping them in one place means a listing cannot silently forget the
//! soft-delete filter.

/// Rows that are live (not in the trash).
pub const ACTIVE_ONLY: &str = "deleted_at IS NULL";

/// Rows that are in the trash.
pub const TRASHED_ONLY: &str = "deleted_at IS NOT NULL";
