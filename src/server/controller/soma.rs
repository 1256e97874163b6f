use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        soma::{CreateSomaDto, SomaDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::soma::CreateSomaParam,
        service::soma::SomaService,
        state::AppState,
    },
};

/// Tag for grouping soma endpoints in OpenAPI documentation
pub static SOMA_TAG: &str = "soma";

/// Create a soma.
///
/// # Access Control
/// - `Admin` role
///
/// # Returns
/// - `201 Created` - Soma created
/// - `400 Bad Request` - Empty name or slug that is not URL-safe
/// - `409 Conflict` - Slug already taken
#[utoipa::path(
    post,
    path = "/api/somas",
    tag = SOMA_TAG,
    request_body = CreateSomaDto,
    responses(
        (status = 201, description = "Soma created", body = SomaDto),
        (status = 400, description = "Invalid name or slug", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_soma(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSomaDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(&[UserRole::Admin])])
        .await?;

    let soma = SomaService::new(&state.db)
        .create(CreateSomaParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(soma.into_dto())))
}

/// Get every soma, newest first.
#[utoipa::path(
    get,
    path = "/api/somas",
    tag = SOMA_TAG,
    responses(
        (status = 200, description = "All somas", body = Vec<SomaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_somas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let somas = SomaService::new(&state.db).list().await?;

    let somas_dto: Vec<_> = somas.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(somas_dto)))
}

/// Get a soma by slug. Lookup is case-insensitive.
#[utoipa::path(
    get,
    path = "/api/somas/{soma}",
    tag = SOMA_TAG,
    params(
        ("soma" = String, Path, description = "Soma slug")
    ),
    responses(
        (status = 200, description = "Soma found", body = SomaDto),
        (status = 404, description = "Soma not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_soma(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let soma = SomaService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(soma.into_dto())))
}
