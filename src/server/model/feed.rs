//! Feed and ranking models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::feed::{FeedItemDto, FeedMediaDto, FeedPageDto},
    server::model::{soma::SomaSummary, user::UserSummary},
};

pub const DEFAULT_FEED_LIMIT: u64 = 20;
pub const MAX_FEED_LIMIT: u64 = 100;

/// Cursor-paginated feed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    /// Restricts the feed to one soma when set.
    pub soma_id: Option<Uuid>,
    pub limit: u64,
    /// Id of the last post already seen; the page starts strictly after it.
    pub cursor: Option<Uuid>,
}

/// Flattened media entry shown on a feed card.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedMedia {
    pub media_type: String,
    pub original_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
    pub author: UserSummary,
    pub soma: SomaSummary,
    /// `None` when the post has no media collection.
    pub media: Option<Vec<FeedMedia>>,
    /// Signed vote sum, zero without votes.
    pub vote_count: i64,
    pub award_count: i64,
}

impl FeedItem {
    pub fn into_dto(self) -> FeedItemDto {
        FeedItemDto {
            id: self.id,
            title: self.title,
            body: self.body,
            impressions: self.impressions,
            created_at: self.created_at,
            author: self.author.into_dto(),
            soma: self.soma.into_dto(),
            media: self.media.map(|media| {
                media
                    .into_iter()
                    .map(|m| FeedMediaDto {
                        media_type: m.media_type,
                        original_url: m.original_url,
                    })
                    .collect()
            }),
            vote_count: self.vote_count,
            award_count: self.award_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub next_cursor: Option<Uuid>,
}

impl FeedPage {
    /// Builds a page, emitting a cursor only when the page came back full.
    pub fn new(items: Vec<FeedItem>, limit: u64) -> Self {
        let next_cursor = if items.len() as u64 == limit {
            items.last().map(|item| item.id)
        } else {
            None
        };

        Self { items, next_cursor }
    }

    pub fn into_dto(self) -> FeedPageDto {
        FeedPageDto {
            items: self.items.into_iter().map(FeedItem::into_dto).collect(),
            next_cursor: self.next_cursor,
        }
    }
}
