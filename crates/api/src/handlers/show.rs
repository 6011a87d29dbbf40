//! Handlers for the `/shows` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use onair_core::content::ContentType;
use onair_core::error::CoreError;
use onair_core::types::DbId;
use onair_db::models::episode::Episode;
use onair_db::models::show::{CreateShow, Show, UpdateShow};
use onair_db::repositories::{EpisodeRepo, LifecycleRepo, ShowRepo};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// POST /api/v1/shows
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateShow>,
) -> AppResult<(StatusCode, Json<Show>)> {
    validate_input(&input)?;
    let show = ShowRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

/// GET /api/v1/shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Show>>> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Show>> {
    let show = find_show(&state, id).await?;
    Ok(Json(show))
}

/// GET /api/v1/shows/{id}/episodes
///
/// 404 when the show itself is in the trash.
pub async fn list_episodes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Episode>>> {
    find_show(&state, id).await?;
    let episodes = EpisodeRepo::list_by_show(&state.pool, id).await?;
    Ok(Json(episodes))
}

/// PUT /api/v1/shows/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShow>,
) -> AppResult<Json<Show>> {
    validate_input(&input)?;
    let show = ShowRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    Ok(Json(show))
}

/// DELETE /api/v1/shows/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    LifecycleRepo::soft_delete(&state.pool, ContentType::Shows, id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn find_show(state: &AppState, id: DbId) -> AppResult<Show> {
    ShowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))
}
