use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        post::{CreatePostDto, PostDto, ScoredPostDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            feed::DEFAULT_FEED_LIMIT,
            post::{CreatePostParam, UpdatePostParam},
        },
        service::{feed::FeedService, post::PostService},
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Query parameters for the top posts listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopPostsParams {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Posts per page
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_FEED_LIMIT
}

/// Create a post in a soma.
///
/// # Access Control
/// - `Creator` or `Admin` role
///
/// # Returns
/// - `201 Created` - Post created
/// - `400 Bad Request` - Empty title or unknown soma
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Viewer role
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Empty title or unknown soma", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(&[UserRole::Creator, UserRole::Admin])])
        .await?;

    let post = PostService::new(&state.db)
        .create(CreatePostParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get posts ranked by vote score.
///
/// # Returns
/// - `200 OK` - One page of ranked posts
/// - `400 Bad Request` - `page` or `limit` is zero
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(TopPostsParams),
    responses(
        (status = 200, description = "Ranked posts", body = Vec<ScoredPostDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_posts(
    State(state): State<AppState>,
    Query(params): Query<TopPostsParams>,
) -> Result<impl IntoResponse, AppError> {
    let posts = FeedService::new(&state.db)
        .top_posts(params.page, params.limit)
        .await?;

    let posts_dto: Vec<_> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(posts_dto)))
}

/// Get a post by id. Each successful read counts as one impression.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get(post_id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Edit a post's title or body.
///
/// # Access Control
/// - The post's author, or an admin
#[utoipa::path(
    patch,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = PostService::new(&state.db)
        .update(&user.actor(), post_id, UpdatePostParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post along with its comments, votes, awards and media.
///
/// # Access Control
/// - The post's author, or an admin
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Neither author nor admin", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PostService::new(&state.db)
        .remove(&user.actor(), post_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get every post in a soma, newest first.
#[utoipa::path(
    get,
    path = "/api/somas/{soma}/posts",
    tag = POST_TAG,
    params(
        ("soma" = Uuid, Path, description = "Soma ID")
    ),
    responses(
        (status = 200, description = "Posts in the soma", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_soma_posts(
    State(state): State<AppState>,
    Path(soma_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).list_by_soma(soma_id).await?;

    let posts_dto: Vec<_> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(posts_dto)))
}
