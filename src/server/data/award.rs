//! Award ledger persistence. Awards are append-only.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::vote::group_by_type,
    model::{
        award::{Award, CreateAwardParam},
        target::Target,
    },
};

pub struct AwardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AwardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAwardParam) -> Result<Award, DbErr> {
        let entity = entity::award::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            awarded_by_id: ActiveValue::Set(param.awarded_by_id),
            target_type: ActiveValue::Set(param.target.target_type()),
            target_id: ActiveValue::Set(param.target.id()),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Award::from_entity(entity))
    }

    /// Gets all awards on a target, newest first.
    pub async fn get_by_target(&self, target: Target) -> Result<Vec<Award>, DbErr> {
        let entities = entity::prelude::Award::find()
            .filter(entity::award::Column::TargetType.eq(target.target_type()))
            .filter(entity::award::Column::TargetId.eq(target.id()))
            .order_by_desc(entity::award::Column::CreatedAt)
            .order_by_desc(entity::award::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Award::from_entity).collect())
    }

    /// Deletes every award on the given targets.
    pub async fn delete_by_targets(&self, targets: &[Target]) -> Result<u64, DbErr> {
        let mut removed = 0;

        for (target_type, ids) in group_by_type(targets) {
            if ids.is_empty() {
                continue;
            }
            let result = entity::prelude::Award::delete_many()
                .filter(entity::award::Column::TargetType.eq(target_type))
                .filter(entity::award::Column::TargetId.is_in(ids))
                .exec(self.db)
                .await?;
            removed += result.rows_affected;
        }

        Ok(removed)
    }
}
