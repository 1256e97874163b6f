use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, feed::FeedPageDto},
    server::{
        error::AppError,
        model::feed::{FeedQuery, DEFAULT_FEED_LIMIT},
        service::feed::FeedService,
        state::AppState,
    },
};

/// Tag for grouping feed endpoints in OpenAPI documentation
pub static FEED_TAG: &str = "feed";

/// Query parameters shared by the global and soma feeds.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedParams {
    /// Items per page, 1 to 100
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// `nextCursor` from the previous page
    pub cursor: Option<Uuid>,
}

fn default_limit() -> u64 {
    DEFAULT_FEED_LIMIT
}

impl FeedParams {
    fn into_query(self, soma_id: Option<Uuid>) -> FeedQuery {
        FeedQuery {
            soma_id,
            limit: self.limit,
            cursor: self.cursor,
        }
    }
}

/// Get the newest posts across every soma.
///
/// Pass the returned `nextCursor` back as `cursor` to fetch the following page.
#[utoipa::path(
    get,
    path = "/api/feed",
    tag = FEED_TAG,
    params(FeedParams),
    responses(
        (status = 200, description = "One page of the feed", body = FeedPageDto),
        (status = 400, description = "Invalid limit or cursor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = FeedService::new(&state.db)
        .feed(params.into_query(None))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get the newest posts within one soma.
#[utoipa::path(
    get,
    path = "/api/somas/{soma}/feed",
    tag = FEED_TAG,
    params(
        ("soma" = Uuid, Path, description = "Soma ID"),
        FeedParams
    ),
    responses(
        (status = 200, description = "One page of the soma's feed", body = FeedPageDto),
        (status = 400, description = "Invalid limit or cursor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_soma_feed(
    State(state): State<AppState>,
    Path(soma_id): Path<Uuid>,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = FeedService::new(&state.db)
        .feed(params.into_query(Some(soma_id)))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}
