//! Handlers for the trash view, restore, and protection endpoints.
//!
//! Soft-deleting happens through each content type's own `DELETE` route;
//! this module covers everything an editor or admin does with items once
//! they are in the trash.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use onair_core::content::ContentType;
use onair_core::types::DbId;
use onair_db::models::trash::{LifecycleRow, PurgePreview, TrashListing};
use onair_db::repositories::{LifecycleRepo, TrashRepo};
use serde::{Deserialize, Serialize};

use super::{content_type_from_path, content_type_from_query};
use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireEditor};
use crate::query::TrashQuery;
use crate::state::AppState;

/// Response body for a successful restore.
#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub restored: bool,
    pub content_type: ContentType,
    pub id: DbId,
}

/// Request body for changing the protection flag.
#[derive(Debug, Deserialize)]
pub struct SetProtectionRequest {
    pub protected: bool,
}

/// GET /api/v1/admin/trash
///
/// Lists trashed items grouped by content type. `?type=` narrows the
/// listing to a single group.
pub async fn list_trash(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<TrashQuery>,
) -> AppResult<Json<TrashListing>> {
    let filter = params
        .content_type
        .as_deref()
        .map(content_type_from_query)
        .transpose()?;

    let listing = TrashRepo::list_trash(&state.pool, filter).await?;
    Ok(Json(listing))
}

/// GET /api/v1/admin/trash/purge-preview
pub async fn purge_preview(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<PurgePreview>> {
    let preview = TrashRepo::purge_preview(&state.pool, Utc::now()).await?;
    Ok(Json(preview))
}

/// POST /api/v1/admin/trash/{content_type}/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path((content_type, id)): Path<(String, DbId)>,
) -> AppResult<Json<RestoreResponse>> {
    let content_type = content_type_from_path(&content_type)?;
    LifecycleRepo::restore(&state.pool, content_type, id).await?;

    tracing::debug!(%content_type, id, user_id = user.user_id, "Restore requested");
    Ok(Json(RestoreResponse {
        restored: true,
        content_type,
        id,
    }))
}

/// PUT /api/v1/admin/content/{content_type}/{id}/protection
///
/// Works on active and trashed items alike.
pub async fn set_protection(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((content_type, id)): Path<(String, DbId)>,
    Json(input): Json<SetProtectionRequest>,
) -> AppResult<Json<LifecycleRow>> {
    let content_type = content_type_from_path(&content_type)?;
    let row = LifecycleRepo::set_protected(&state.pool, content_type, id, input.protected).await?;
    Ok(Json(row))
}
