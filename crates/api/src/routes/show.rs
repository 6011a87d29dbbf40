//! Route definitions for the `/shows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete (soft)
/// GET    /{id}/episodes    -> list_episodes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list).post(show::create))
        .route(
            "/{id}",
            get(show::get_by_id).put(show::update).delete(show::delete),
        )
        .route("/{id}/episodes", get(show::list_episodes))
}
