//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::comment::{Comment, CreateCommentParam};

pub struct CommentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            content: ActiveValue::Set(param.content),
            author_id: ActiveValue::Set(param.author_id),
            post_id: ActiveValue::Set(param.post_id),
            parent_comment_id: ActiveValue::Set(param.parent_comment_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets every comment on a post at any depth, oldest first.
    pub async fn get_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Replaces a comment's content.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Updated comment
    /// - `Err(DbErr::RecordNotFound)` - No comment with that id
    pub async fn update_content(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment {} not found",
                comment_id
            )))?;

        let mut active_model = comment.into_active_model();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Comment::from_entity(updated))
    }

    /// Deletes a comment. Replies cascade through the parent foreign key.
    pub async fn delete(&self, comment_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
