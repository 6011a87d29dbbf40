//! Handlers for the `/events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use onair_core::content::ContentType;
use onair_core::error::CoreError;
use onair_core::types::{DbId, Timestamp};
use onair_db::models::event::{CreateEvent, Event, UpdateEvent};
use onair_db::repositories::{EventRepo, LifecycleRepo};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::UpcomingParams;
use crate::state::AppState;

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    validate_input(&input)?;
    validate_time_range(input.starts_at, input.ends_at)?;
    let event = EventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events (`?upcoming=true` hides finished events)
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<UpcomingParams>,
) -> AppResult<Json<Vec<Event>>> {
    let events = if params.upcoming {
        EventRepo::list_upcoming(&state.pool, Utc::now()).await?
    } else {
        EventRepo::list(&state.pool).await?
    };
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    validate_input(&input)?;
    if let (Some(starts_at), ends_at) = (input.starts_at, input.ends_at) {
        validate_time_range(starts_at, ends_at)?;
    }
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    LifecycleRepo::soft_delete(&state.pool, ContentType::Events, id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_time_range(starts_at: Timestamp, ends_at: Option<Timestamp>) -> AppResult<()> {
    match ends_at {
        Some(end) if end < starts_at => Err(AppError::Core(CoreError::Validation(
            "ends_at must not be before starts_at".into(),
        ))),
        _ => Ok(()),
    }
}
