//! Handlers for cross-type content reads.

use axum::extract::{Query, State};
use axum::Json;
use onair_db::models::content::RecentItem;
use onair_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::query::{LimitParams, DEFAULT_RECENT_LIMIT};
use crate::state::AppState;

/// GET /api/v1/content/recent
///
/// Recently updated active items across every content type.
pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<RecentItem>>> {
    let items = ContentRepo::list_recent(&state.pool, params.clamped(DEFAULT_RECENT_LIMIT)).await?;
    Ok(Json(items))
}
