//! Comment domain models and parameters.
//!
//! Comments form a tree rooted at a post. Every comment in a thread carries the post's id,
//! so a thread can be loaded flat and rebuilt by following `parent_comment_id`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    /// `None` for a top-level comment.
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            author_id: entity.author_id,
            post_id: entity.post_id,
            parent_comment_id: entity.parent_comment_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            content: self.content,
            author_id: self.author_id,
            post_id: self.post_id,
            parent_comment_id: self.parent_comment_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for a comment insert.
///
/// For replies the service fills `post_id` from the parent; callers never supply it.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
}
