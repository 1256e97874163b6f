pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_soma_table;
mod m20260901_000003_create_post_table;
mod m20260901_000004_create_comment_table;
mod m20260902_000005_create_vote_table;
mod m20260902_000006_create_award_table;
mod m20260902_000007_create_notification_table;
mod m20260903_000008_create_media_collection_table;
mod m20260903_000009_create_media_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_soma_table::Migration),
            Box::new(m20260901_000003_create_post_table::Migration),
            Box::new(m20260901_000004_create_comment_table::Migration),
            Box::new(m20260902_000005_create_vote_table::Migration),
            Box::new(m20260902_000006_create_award_table::Migration),
            Box::new(m20260902_000007_create_notification_table::Migration),
            Box::new(m20260903_000008_create_media_collection_table::Migration),
            Box::new(m20260903_000009_create_media_item_table::Migration),
        ]
    }
}
