//! Lookup of the entity behind a polymorphic target.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};
use uuid::Uuid;

use crate::server::model::target::{ResolvedTarget, Target};

pub struct TargetRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TargetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the author of the post or comment a target points at.
    ///
    /// Only the author column is selected.
    ///
    /// # Returns
    /// - `Ok(Some(ResolvedTarget))` - Target exists
    /// - `Ok(None)` - No row with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_author(&self, target: Target) -> Result<Option<ResolvedTarget>, DbErr> {
        let author_id: Option<Uuid> = match target {
            Target::Post(id) => {
                entity::prelude::Post::find_by_id(id)
                    .select_only()
                    .column(entity::post::Column::AuthorId)
                    .into_tuple()
                    .one(self.db)
                    .await?
            }
            Target::Comment(id) => {
                entity::prelude::Comment::find_by_id(id)
                    .select_only()
                    .column(entity::comment::Column::AuthorId)
                    .into_tuple()
                    .one(self.db)
                    .await?
            }
        };

        Ok(author_id.map(|author_id| ResolvedTarget { target, author_id }))
    }
}
