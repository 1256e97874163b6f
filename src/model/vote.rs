use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertVoteDto {
    /// `POST` or `COMMENT`.
    pub target_type: String,
    pub target_id: Uuid,
    /// `1` for an upvote, `-1` for a downvote.
    pub value: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveVoteDto {
    pub target_type: String,
    pub target_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteDto {
    pub user_id: Uuid,
    pub target_type: String,
    pub target_id: Uuid,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
