//! Award factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TargetType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct AwardFactory<'a> {
    db: &'a DatabaseConnection,
    awarded_by_id: Uuid,
    target_type: TargetType,
    target_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl<'a> AwardFactory<'a> {
    /// Defaults to a `"Gold"` award created now.
    pub fn new(
        db: &'a DatabaseConnection,
        awarded_by_id: Uuid,
        target_type: TargetType,
        target_id: Uuid,
    ) -> Self {
        Self {
            db,
            awarded_by_id,
            target_type,
            target_id,
            name: "Gold".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::award::Model, DbErr> {
        entity::award::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            awarded_by_id: ActiveValue::Set(self.awarded_by_id),
            target_type: ActiveValue::Set(self.target_type),
            target_id: ActiveValue::Set(self.target_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_award(
    db: &DatabaseConnection,
    awarded_by_id: Uuid,
    target_type: TargetType,
    target_id: Uuid,
) -> Result<entity::award::Model, DbErr> {
    AwardFactory::new(db, awarded_by_id, target_type, target_id)
        .build()
        .await
}
