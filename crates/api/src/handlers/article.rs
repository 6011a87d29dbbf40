//! Handlers for the `/articles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use onair_core::content::ContentType;
use onair_core::error::CoreError;
use onair_core::types::DbId;
use onair_db::models::article::{Article, CreateArticle, UpdateArticle};
use onair_db::repositories::{ArticleRepo, LifecycleRepo};

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<Article>)> {
    validate_input(&input)?;
    let article = ArticleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/v1/articles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(articles))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    Ok(Json(article))
}

/// PUT /api/v1/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<Article>> {
    validate_input(&input)?;
    let article = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    Ok(Json(article))
}

/// DELETE /api/v1/articles/{id}
///
/// Moves the article to the trash on behalf of the authenticated editor.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    LifecycleRepo::soft_delete(&state.pool, ContentType::Articles, id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
