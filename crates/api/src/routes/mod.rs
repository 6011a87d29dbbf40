pub mod article;
pub mod content;
pub mod episode;
pub mod event;
pub mod health;
pub mod resource;
pub mod show;
pub mod trash;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                                         list, create
/// /articles/{id}                                    get, update, soft delete
///
/// /shows                                            list, create
/// /shows/{id}                                       get, update, soft delete
/// /shows/{id}/episodes                              active episodes of a show
///
/// /episodes                                         list, create
/// /episodes/{id}                                    get, update, soft delete
///
/// /events                                           list (?upcoming=true), create
/// /events/{id}                                      get, update, soft delete
///
/// /resources                                        list, create
/// /resources/{id}                                   get, update, soft delete
///
/// /content/recent                                   recently updated items (?limit=)
///
/// /admin/trash                                      grouped trash view (?type=)
/// /admin/trash/purge-preview                        purge preview (admin only)
/// /admin/trash/{content_type}/{id}/restore          restore (POST)
/// /admin/content/{content_type}/{id}/protection     set protection (PUT, admin only)
/// ```
///
/// Reads of active content are public. Writes, soft deletes, and every
/// trash endpoint require an editor or admin token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", article::router())
        .nest("/shows", show::router())
        .nest("/episodes", episode::router())
        .nest("/events", event::router())
        .nest("/resources", resource::router())
        .nest("/content", content::router())
        .nest("/admin/trash", trash::router())
        .nest("/admin/content", trash::protection_router())
}
