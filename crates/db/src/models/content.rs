//! Cross-type content projections.

use onair_core::content::ContentType;
use onair_core::types::{DbId, Timestamp};
use serde::Serialize;

/// One entry in the "recently updated" dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentItem {
    pub content_type: ContentType,
    pub id: DbId,
    pub title: String,
    pub updated_at: Timestamp,
}
