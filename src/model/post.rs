use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub title: String,
    pub body: Option<String>,
    pub soma_id: Uuid,
}

/// Partial update; absent fields keep their current value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub author_id: Uuid,
    pub soma_id: Uuid,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post as ranked by the top posts listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPostDto {
    #[serde(flatten)]
    pub post: PostDto,
    /// Signed sum of every vote on the post.
    pub score: i64,
}
