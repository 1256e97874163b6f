use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, notification::NotificationDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the current user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "The user's notifications", body = Vec<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Mark one of the current user's notifications as read.
///
/// Marking an already read notification refreshes its `readAt`.
#[utoipa::path(
    patch,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Notification belongs to another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(user.id, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}
