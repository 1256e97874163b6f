//! Award domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{model::award::AwardDto, server::model::target::Target};

#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub id: Uuid,
    pub awarded_by_id: Uuid,
    pub target: Target,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Award {
    pub fn from_entity(entity: entity::award::Model) -> Self {
        Self {
            id: entity.id,
            awarded_by_id: entity.awarded_by_id,
            target: Target::new(entity.target_type, entity.target_id),
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AwardDto {
        AwardDto {
            id: self.id,
            awarded_by_id: self.awarded_by_id,
            target_type: self.target.type_str(),
            target_id: self.target.id(),
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAwardParam {
    pub awarded_by_id: Uuid,
    pub target: Target,
    pub name: String,
}
