use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Free-text tag such as `COMMENT` or `AWARD`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub target_type: Option<String>,
    pub target_id: Option<Uuid>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
