//! Errors raised while resolving a polymorphic vote or award target.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    /// The target type is neither `POST` nor `COMMENT`.
    #[error("Invalid target type '{0}', expected POST or COMMENT")]
    InvalidType(String),

    /// The referenced post does not exist.
    #[error("Post with id '{0}' not found")]
    PostNotFound(Uuid),

    /// The referenced comment does not exist.
    #[error("Comment with id '{0}' not found")]
    CommentNotFound(Uuid),
}

/// A target that cannot be resolved is a malformed request, so every variant is a
/// 400 Bad Request carrying the error's message.
impl IntoResponse for TargetError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
