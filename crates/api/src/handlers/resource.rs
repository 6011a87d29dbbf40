//! Handlers for the `/resources` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use onair_core::content::ContentType;
use onair_core::error::CoreError;
use onair_core::types::DbId;
use onair_db::models::resource::{CreateResource, Resource, UpdateResource};
use onair_db::repositories::{LifecycleRepo, ResourceRepo};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// POST /api/v1/resources
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    validate_input(&input)?;
    let resource = ResourceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// GET /api/v1/resources
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Resource>>> {
    let resources = ResourceRepo::list(&state.pool).await?;
    Ok(Json(resources))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(resource))
}

/// PUT /api/v1/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResource>,
) -> AppResult<Json<Resource>> {
    validate_input(&input)?;
    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(resource))
}

/// DELETE /api/v1/resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    LifecycleRepo::soft_delete(&state.pool, ContentType::Resources, id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
