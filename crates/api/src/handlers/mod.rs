//! HTTP handlers, one module per resource.

pub mod article;
pub mod content;
pub mod episode;
pub mod event;
pub mod resource;
pub mod show;
pub mod trash;

use onair_core::content::ContentType;
use onair_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request body.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// Resolve a `{content_type}` path segment. An unknown type names nothing
/// that exists, so it is a 404.
pub(crate) fn content_type_from_path(raw: &str) -> AppResult<ContentType> {
    raw.parse::<ContentType>()
        .map_err(|_| AppError::NotFound(format!("Unknown content type: {raw}")))
}

/// Resolve a `?type=` filter. An unknown value is a malformed query.
pub(crate) fn content_type_from_query(raw: &str) -> AppResult<ContentType> {
    raw.parse::<ContentType>()
        .map_err(|_| AppError::BadRequest(format!("Unknown content type: {raw}")))
}
