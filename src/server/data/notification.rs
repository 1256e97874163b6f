use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::notification::{CreateNotificationParam, Notification};

pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind),
            message: ActiveValue::Set(param.message),
            target_type: ActiveValue::Set(param.target.map(|t| t.target_type())),
            target_id: ActiveValue::Set(param.target.map(|t| t.id())),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    pub async fn find_by_id(&self, notification_id: Uuid) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Gets a user's notifications, newest first.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Stamps `read_at`, overwriting any earlier stamp.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Updated notification
    /// - `Err(DbErr::RecordNotFound)` - No notification with that id
    pub async fn mark_read(
        &self,
        notification_id: Uuid,
        read_at: DateTime<Utc>,
    ) -> Result<Notification, DbErr> {
        let notification = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Notification {} not found",
                notification_id
            )))?;

        let mut active_model = notification.into_active_model();
        active_model.read_at = ActiveValue::Set(Some(read_at));

        let updated = active_model.update(self.db).await?;

        Ok(Notification::from_entity(updated))
    }
}
