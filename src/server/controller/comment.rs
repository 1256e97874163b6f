use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Comment on a post.
///
/// Notifies the post's author unless they are commenting on their own post.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Top-level comment created
/// - `400 Bad Request` - Post does not exist or content is empty
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Post does not exist or content is empty", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .create(user.id, post_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Reply to a comment.
///
/// The reply is attached to the parent's post.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Reply created
/// - `400 Bad Request` - Parent does not exist or content is empty
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/comments/{comment_id}/replies",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = Uuid, Path, description = "Parent comment ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Reply created", body = CommentDto),
        (status = 400, description = "Parent does not exist or content is empty", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<Uuid>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reply = CommentService::new(&state.db)
        .reply(user.id, comment_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}

/// List every comment on a post, oldest first.
///
/// The list is flat; clients rebuild the tree from `parentCommentId`.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).list_by_post(post_id).await?;

    let comments_dto: Vec<_> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments_dto)))
}

/// Edit a comment.
///
/// # Access Control
/// - The comment's author, or an admin
///
/// # Returns
/// - `200 OK` - Updated comment
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Neither author nor admin
/// - `404 Not Found` - Comment does not exist
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<Uuid>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .update(&user.actor(), comment_id, payload.content)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment and its replies.
///
/// # Access Control
/// - The comment's author, or an admin
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Neither author nor admin
/// - `404 Not Found` - Comment does not exist
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CommentService::new(&state.db)
        .remove(&user.actor(), comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
