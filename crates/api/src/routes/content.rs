use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
pub fn router() -> Router<AppState> {
    Router::new().route("/recent", get(content::recent))
}
