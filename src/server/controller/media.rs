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
        media::{AttachMediaDto, MediaCollectionDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::media::NewMediaItem,
        service::media::MediaService, state::AppState,
    },
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

/// Attach media items to a post.
///
/// Items are appended to the post's collection, which is created on first use.
///
/// # Access Control
/// - The post's author, or an admin
///
/// # Returns
/// - `201 Created` - The post's whole collection after the append
/// - `400 Bad Request` - No items, or an unknown media type
/// - `403 Forbidden` - Neither author nor admin
/// - `404 Not Found` - Post does not exist
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/media",
    tag = MEDIA_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    request_body = AttachMediaDto,
    responses(
        (status = 201, description = "Media attached", body = MediaCollectionDto),
        (status = 400, description = "Invalid media items", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_media(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<AttachMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = payload
        .items
        .into_iter()
        .map(NewMediaItem::from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let collection = MediaService::new(&state.db)
        .attach(&user.actor(), post_id, items)
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into_dto())))
}

/// Get a post's media collection.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/media",
    tag = MEDIA_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Media collection", body = MediaCollectionDto),
        (status = 404, description = "Post has no media", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_media(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let collection = MediaService::new(&state.db)
        .get_by_post(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} has no media", post_id)))?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}
