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
        award::{AwardDto, CreateAwardDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{award::CreateAwardParam, target::Target},
        service::award::AwardService,
        state::AppState,
    },
};

/// Tag for grouping award endpoints in OpenAPI documentation
pub static AWARD_TAG: &str = "award";

/// Give an award to a post or comment.
///
/// The content's author is notified unless they awarded themselves.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Award created
/// - `400 Bad Request` - Unknown target type, missing target, or empty name
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/awards",
    tag = AWARD_TAG,
    request_body = CreateAwardDto,
    responses(
        (status = 201, description = "Award created", body = AwardDto),
        (status = 400, description = "Invalid target or name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_award(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAwardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateAwardParam {
        awarded_by_id: user.id,
        target: Target::parse(&payload.target_type, payload.target_id)?,
        name: payload.name,
    };

    let award = AwardService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(award.into_dto())))
}

/// List awards on a post, newest first.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/awards",
    tag = AWARD_TAG,
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Awards on the post", body = Vec<AwardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_awards(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let awards = AwardService::new(&state.db).list_by_post(post_id).await?;

    let awards_dto: Vec<_> = awards.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(awards_dto)))
}

/// List awards on a comment, newest first.
#[utoipa::path(
    get,
    path = "/api/comments/{comment_id}/awards",
    tag = AWARD_TAG,
    params(
        ("comment_id" = Uuid, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Awards on the comment", body = Vec<AwardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment_awards(
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let awards = AwardService::new(&state.db)
        .list_by_comment(comment_id)
        .await?;

    let awards_dto: Vec<_> = awards.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(awards_dto)))
}
