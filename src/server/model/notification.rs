//! Notification domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{model::notification::NotificationDto, server::model::target::Target};

/// Tag for a notification raised by a top-level comment on the recipient's post.
pub const KIND_COMMENT: &str = "COMMENT";

/// Tag for a notification raised by an award on the recipient's post or comment.
pub const KIND_AWARD: &str = "AWARD";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    /// Recipient.
    pub user_id: Uuid,
    pub kind: String,
    pub message: String,
    pub target: Option<Target>,
    /// `None` while unread.
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        let target = match (entity.target_type, entity.target_id) {
            (Some(target_type), Some(target_id)) => Some(Target::new(target_type, target_id)),
            _ => None,
        };

        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            message: entity.message,
            target,
            read_at: entity.read_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind,
            message: self.message,
            target_type: self.target.map(|t| t.type_str()),
            target_id: self.target.map(|t| t.id()),
            read_at: self.read_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNotificationParam {
    pub user_id: Uuid,
    pub kind: String,
    pub message: String,
    pub target: Option<Target>,
}

impl CreateNotificationParam {
    /// Notification sent to a post's author when someone else comments on it.
    pub fn comment_on_post(recipient_id: Uuid, post_id: Uuid, post_title: &str) -> Self {
        Self {
            user_id: recipient_id,
            kind: KIND_COMMENT.to_string(),
            message: format!("Someone commented on your post: \"{}\"", post_title),
            target: Some(Target::Post(post_id)),
        }
    }

    /// Notification sent to a target's author when someone else awards it.
    pub fn award(recipient_id: Uuid, target: Target, award_name: &str) -> Self {
        Self {
            user_id: recipient_id,
            kind: KIND_AWARD.to_string(),
            message: format!(
                "Your {} received the \"{}\" award",
                target.noun(),
                award_name
            ),
            target: Some(target),
        }
    }
}
