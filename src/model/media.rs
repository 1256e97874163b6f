use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachMediaItemDto {
    /// `IMAGE`, `VIDEO` or `AUDIO`.
    #[serde(rename = "type")]
    pub media_type: String,
    pub original_url: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachMediaDto {
    pub items: Vec<AttachMediaItemDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub media_type: String,
    pub original_url: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaCollectionDto {
    pub id: Uuid,
    pub post_id: Uuid,
    pub items: Vec<MediaItemDto>,
}
