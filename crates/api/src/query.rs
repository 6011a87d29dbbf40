//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default number of items in the recent-content widget.
pub const DEFAULT_RECENT_LIMIT: i64 = 20;

/// Upper bound for any `?limit=` parameter.
pub const MAX_LIMIT: i64 = 100;

/// `?limit=` parameter.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    /// The requested limit clamped to `1..=MAX_LIMIT`.
    pub fn clamped(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, MAX_LIMIT)
    }
}

/// `?type=` filter accepted by the trash listing.
#[derive(Debug, Deserialize)]
pub struct TrashQuery {
    /// Optional content type filter (e.g. "articles", "shows").
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// `?upcoming=true` filter accepted by the events listing.
#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    #[serde(default)]
    pub upcoming: bool,
}
