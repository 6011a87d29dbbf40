//! Route definitions for the `/episodes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
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
        .route("/", get(episode::list).post(episode::create))
        .route(
            "/{id}",
            get(episode::get_by_id).put(episode::update).delete(episode::delete),
        )
}
