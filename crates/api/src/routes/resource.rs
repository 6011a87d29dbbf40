//! Route definitions for the `/resources` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/resources`.
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
        .route("/", get(resource::list).post(resource::create))
        .route(
            "/{id}",
            get(resource::get_by_id).put(resource::update).delete(resource::delete),
        )
}
