use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Award::Table)
                    .if_not_exists()
                    .col(uuid(Award::Id).primary_key())
                    .col(uuid(Award::AwardedById))
                    .col(string_len(Award::TargetType, 16))
                    .col(uuid(Award::TargetId))
                    .col(string(Award::Name))
                    .col(
                        timestamp_with_time_zone(Award::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_award_awarded_by_id")
                            .from(Award::Table, Award::AwardedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_award_target")
                    .table(Award::Table)
                    .col(Award::TargetType)
                    .col(Award::TargetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Award::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Award {
    Table,
    Id,
    AwardedById,
    TargetType,
    TargetId,
    Name,
    CreatedAt,
}
