use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        award::{self, AWARD_TAG},
        comment::{self, COMMENT_TAG},
        feed::{self, FEED_TAG},
        media::{self, MEDIA_TAG},
        notification::{self, NOTIFICATION_TAG},
        post::{self, POST_TAG},
        soma::{self, SOMA_TAG},
        user::{self, USER_TAG},
        vote::{self, VOTE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Soma API", description = "Posts, comments, votes, awards and feeds"),
    tags(
        (name = USER_TAG, description = "User profiles"),
        (name = SOMA_TAG, description = "Communities that posts belong to"),
        (name = POST_TAG, description = "Posts and the top posts ranking"),
        (name = MEDIA_TAG, description = "Media attached to posts"),
        (name = COMMENT_TAG, description = "Comments and replies"),
        (name = VOTE_TAG, description = "Up and down votes on posts and comments"),
        (name = AWARD_TAG, description = "Awards given to posts and comments"),
        (name = NOTIFICATION_TAG, description = "Per-user notifications"),
        (name = FEED_TAG, description = "Cursor-paginated feeds"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_current_user, user::update_current_user))
        .routes(routes!(user::get_user))
        .routes(routes!(soma::create_soma, soma::get_somas))
        .routes(routes!(soma::get_soma))
        .routes(routes!(post::create_post, post::get_top_posts))
        .routes(routes!(
            post::get_post,
            post::update_post,
            post::delete_post
        ))
        .routes(routes!(post::get_soma_posts))
        .routes(routes!(media::attach_media, media::get_post_media))
        .routes(routes!(comment::create_comment, comment::get_post_comments))
        .routes(routes!(comment::create_reply))
        .routes(routes!(comment::update_comment, comment::delete_comment))
        .routes(routes!(vote::upsert_vote, vote::remove_vote))
        .routes(routes!(award::create_award))
        .routes(routes!(award::get_post_awards))
        .routes(routes!(award::get_comment_awards))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(feed::get_feed))
        .routes(routes!(feed::get_soma_feed))
        .split_for_parts();

    let docs = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api);
    router.merge(docs)
}
