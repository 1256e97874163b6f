use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{soma::SomaSummaryDto, user::UserSummaryDto};

/// Media attached to a feed item, flattened to what a card needs to render.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedMediaDto {
    #[serde(rename = "type")]
    pub media_type: String,
    pub original_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemDto {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
    pub author: UserSummaryDto,
    pub soma: SomaSummaryDto,
    pub media: Option<Vec<FeedMediaDto>>,
    pub vote_count: i64,
    pub award_count: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedPageDto {
    pub items: Vec<FeedItemDto>,
    /// Pass back as `cursor` to fetch the next page; absent on the last page.
    pub next_cursor: Option<Uuid>,
}
