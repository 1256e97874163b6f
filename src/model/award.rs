use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAwardDto {
    pub target_type: String,
    pub target_id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwardDto {
    pub id: Uuid,
    pub awarded_by_id: Uuid,
    pub target_type: String,
    pub target_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
