//! Vote factory.

use chrono::Utc;
use entity::sea_orm_active_enums::TargetType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Inserts a vote row directly.
///
/// Fails with a primary key violation if the user already voted on the target,
/// which makes it useful for asserting the ledger never writes a second row.
pub async fn create_vote(
    db: &DatabaseConnection,
    user_id: Uuid,
    target_type: TargetType,
    target_id: Uuid,
    value: i32,
) -> Result<entity::vote::Model, DbErr> {
    let now = Utc::now();
    entity::vote::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        target_type: ActiveValue::Set(target_type),
        target_id: ActiveValue::Set(target_id),
        value: ActiveValue::Set(value),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
