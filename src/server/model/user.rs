//! User domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::model::user::{UserDto, UserSummaryDto};

/// Full user record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    /// Sole authorization axis.
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            display_name: entity.display_name,
            bio: entity.bio,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Identity used by services for authorization decisions.
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            role: self.role,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            display_name: self.display_name,
            bio: self.bio,
            role: self.role.to_value(),
            created_at: self.created_at,
        }
    }
}

/// The `(userId, role)` pair supplied by the identity layer for an authenticated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: UserRole,
}

/// Author or awarder projection embedded in feed items.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            display_name: entity.display_name,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
        }
    }
}

/// Profile fields a user may change about themselves.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(user_id: Uuid, dto: crate::model::user::UpdateProfileDto) -> Self {
        Self {
            user_id,
            display_name: dto.display_name,
            bio: dto.bio,
        }
    }
}
