//! Vote domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::vote::VoteDto,
    server::{error::AppError, model::target::Target},
};

/// Direction of a vote; the only two values a vote row may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl TryFrom<i32> for VoteValue {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(AppError::BadRequest(format!(
                "Vote value must be 1 or -1, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub user_id: Uuid,
    pub target: Target,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vote {
    pub fn from_entity(entity: entity::vote::Model) -> Self {
        Self {
            user_id: entity.user_id,
            target: Target::new(entity.target_type, entity.target_id),
            value: entity.value,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> VoteDto {
        VoteDto {
            user_id: self.user_id,
            target_type: self.target.type_str(),
            target_id: self.target.id(),
            value: self.value,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertVoteParam {
    pub user_id: Uuid,
    pub target: Target,
    pub value: VoteValue,
}
