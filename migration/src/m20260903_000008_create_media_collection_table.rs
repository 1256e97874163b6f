use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000003_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaCollection::Table)
                    .if_not_exists()
                    .col(uuid(MediaCollection::Id).primary_key())
                    .col(uuid_uniq(MediaCollection::PostId))
                    .col(
                        timestamp_with_time_zone(MediaCollection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_collection_post_id")
                            .from(MediaCollection::Table, MediaCollection::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaCollection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MediaCollection {
    Table,
    Id,
    PostId,
    CreatedAt,
}
