//! Route definitions for the `/articles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete (soft)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(article::list).post(article::create))
        .route(
            "/{id}",
            get(article::get_by_id).put(article::update).delete(article::delete),
        )
}
