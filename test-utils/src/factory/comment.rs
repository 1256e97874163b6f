//! Comment factory for creating top-level comments and replies.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test comments.
///
/// The factory writes `post_id` exactly as given, even for replies, so tests can
/// construct rows the comment service would never produce.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: Uuid,
    author_id: Uuid,
    parent_comment_id: Option<Uuid>,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, post_id: Uuid, author_id: Uuid) -> Self {
        Self {
            db,
            post_id,
            author_id,
            parent_comment_id: None,
            content: format!("Comment {}", next_id()),
            created_at: Utc::now(),
        }
    }

    pub fn parent(mut self, parent_comment_id: Uuid) -> Self {
        self.parent_comment_id = Some(parent_comment_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            post_id: ActiveValue::Set(self.post_id),
            parent_comment_id: ActiveValue::Set(self.parent_comment_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment on a post.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: Uuid,
    author_id: Uuid,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id).build().await
}
