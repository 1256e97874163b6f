use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        vote::{RemoveVoteDto, UpsertVoteDto, VoteDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            target::Target,
            vote::{UpsertVoteParam, VoteValue},
        },
        service::vote::VoteService,
        state::AppState,
    },
};

/// Tag for grouping vote endpoints in OpenAPI documentation
pub static VOTE_TAG: &str = "vote";

/// Cast or change a vote on a post or comment.
///
/// A user holds at most one vote per target; voting again replaces the value.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The user's vote after the write
/// - `400 Bad Request` - Unknown target type, missing target, or value other than 1/-1
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/votes",
    tag = VOTE_TAG,
    request_body = UpsertVoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = VoteDto),
        (status = 400, description = "Invalid target or value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_vote(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpsertVoteParam {
        user_id: user.id,
        target: Target::parse(&payload.target_type, payload.target_id)?,
        value: VoteValue::try_from(payload.value)?,
    };

    let vote = VoteService::new(&state.db).upsert(param).await?;

    Ok((StatusCode::OK, Json(vote.into_dto())))
}

/// Withdraw a vote.
///
/// Succeeds even when the user had not voted on the target.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `204 No Content` - The user has no vote on the target
/// - `400 Bad Request` - Unknown target type
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    delete,
    path = "/api/votes",
    tag = VOTE_TAG,
    request_body = RemoveVoteDto,
    responses(
        (status = 204, description = "Vote removed or never existed"),
        (status = 400, description = "Invalid target type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_vote(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RemoveVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let target = Target::parse(&payload.target_type, payload.target_id)?;

    VoteService::new(&state.db).remove(user.id, target).await?;

    Ok(StatusCode::NO_CONTENT)
}
