use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000008_create_media_collection_table::MediaCollection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaItem::Table)
                    .if_not_exists()
                    .col(uuid(MediaItem::Id).primary_key())
                    .col(uuid(MediaItem::CollectionId))
                    .col(string_len(MediaItem::MediaType, 16))
                    .col(text(MediaItem::OriginalUrl))
                    .col(json_null(MediaItem::Metadata))
                    .col(
                        timestamp_with_time_zone(MediaItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_item_collection_id")
                            .from(MediaItem::Table, MediaItem::CollectionId)
                            .to(MediaCollection::Table, MediaCollection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MediaItem {
    Table,
    Id,
    CollectionId,
    MediaType,
    OriginalUrl,
    Metadata,
    CreatedAt,
}
