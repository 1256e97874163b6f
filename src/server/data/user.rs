//! User data repository for database operations.
//!
//! Users are created by the identity provider integration; this repository only reads
//! them and updates profile fields.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{UpdateProfileParam, User};

/// Repository providing database operations for users.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their unique username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Updates display name and bio, leaving `None` fields unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(param.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = user.into_active_model();

        if let Some(display_name) = param.display_name {
            active_model.display_name = ActiveValue::Set(Some(display_name));
        }
        if let Some(bio) = param.bio {
            active_model.bio = ActiveValue::Set(Some(bio));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }
}
