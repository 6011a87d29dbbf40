//! Route definitions for trash administration.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::trash;
use crate::state::AppState;

/// Routes mounted at `/admin/trash`.
///
/// ```text
/// GET    /                                -> list_trash (?type=content_type)
/// GET    /purge-preview                   -> purge_preview (admin)
/// POST   /{content_type}/{id}/restore     -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trash::list_trash))
        .route("/purge-preview", get(trash::purge_preview))
        .route("/{content_type}/{id}/restore", post(trash::restore))
}

/// Routes mounted at `/admin/content`.
///
/// ```text
/// PUT    /{content_type}/{id}/protection  -> set_protection (admin)
/// ```
pub fn protection_router() -> Router<AppState> {
    Router::new().route(
        "/{content_type}/{id}/protection",
        put(trash::set_protection),
    )
}
