//! Vote ledger persistence.
//!
//! The composite primary key `(user_id, target_type, target_id)` is the only thing that
//! keeps a user to one vote per target. Writes therefore go through a single
//! `INSERT ... ON CONFLICT DO UPDATE` instead of a read followed by a write.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::{
    target::Target,
    vote::{UpsertVoteParam, Vote},
};

pub struct VoteRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the vote or replaces the value of the user's existing vote on the target.
    ///
    /// `created_at` is kept from the first insert; `updated_at` moves on every write.
    ///
    /// # Returns
    /// - `Ok(Vote)` - The single vote row for this user and target after the write
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertVoteParam) -> Result<Vote, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Vote::insert(entity::vote::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            target_type: ActiveValue::Set(param.target.target_type()),
            target_id: ActiveValue::Set(param.target.id()),
            value: ActiveValue::Set(param.value.as_i32()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::vote::Column::UserId,
                entity::vote::Column::TargetType,
                entity::vote::Column::TargetId,
            ])
            .update_columns([entity::vote::Column::Value])
            .update_columns([entity::vote::Column::UpdatedAt])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Vote::from_entity(entity))
    }

    /// Deletes the user's vote on a target if there is one.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows removed, zero when no vote existed
    pub async fn delete(&self, user_id: Uuid, target: Target) -> Result<u64, DbErr> {
        let result = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .filter(entity::vote::Column::TargetType.eq(target.target_type()))
            .filter(entity::vote::Column::TargetId.eq(target.id()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every vote on the given targets.
    pub async fn delete_by_targets(&self, targets: &[Target]) -> Result<u64, DbErr> {
        let mut removed = 0;

        for (target_type, ids) in group_by_type(targets) {
            if ids.is_empty() {
                continue;
            }
            let result = entity::prelude::Vote::delete_many()
                .filter(entity::vote::Column::TargetType.eq(target_type))
                .filter(entity::vote::Column::TargetId.is_in(ids))
                .exec(self.db)
                .await?;
            removed += result.rows_affected;
        }

        Ok(removed)
    }
}

/// Splits targets into post ids and comment ids.
pub(super) fn group_by_type(
    targets: &[Target],
) -> [(entity::sea_orm_active_enums::TargetType, Vec<Uuid>); 2] {
    use entity::sea_orm_active_enums::TargetType;

    let mut posts = Vec::new();
    let mut comments = Vec::new();
    for target in targets {
        match target {
            Target::Post(id) => posts.push(*id),
            Target::Comment(id) => comments.push(*id),
        }
    }

    [(TargetType::Post, posts), (TargetType::Comment, comments)]
}
