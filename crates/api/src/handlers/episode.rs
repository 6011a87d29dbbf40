//! Handlers for the `/episodes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use onair_core::content::ContentType;
use onair_core::error::CoreError;
use onair_core::types::DbId;
use onair_db::models::episode::{CreateEpisode, Episode, UpdateEpisode};
use onair_db::repositories::{EpisodeRepo, LifecycleRepo, ShowRepo};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// POST /api/v1/episodes
///
/// The parent show must be active.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    validate_input(&input)?;
    if ShowRepo::find_by_id(&state.pool, input.show_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Show",
            id: input.show_id,
        }));
    }
    let episode = EpisodeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /api/v1/episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    Ok(Json(episode))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisode>,
) -> AppResult<Json<Episode>> {
    validate_input(&input)?;
    let episode = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    Ok(Json(episode))
}

/// DELETE /api/v1/episodes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    LifecycleRepo::soft_delete(&state.pool, ContentType::Episodes, id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
