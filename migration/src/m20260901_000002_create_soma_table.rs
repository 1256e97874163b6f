use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Soma::Table)
                    .if_not_exists()
                    .col(uuid(Soma::Id).primary_key())
                    .col(string_uniq(Soma::Slug))
                    .col(string(Soma::Name))
                    .col(text_null(Soma::Description))
                    .col(
                        timestamp_with_time_zone(Soma::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Soma::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Soma {
    Table,
    Id,
    Slug,
    Name,
    Description,
    CreatedAt,
}
