//! Post domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::post::{CreatePostDto, PostDto, ScoredPostDto, UpdatePostDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub author_id: Uuid,
    pub soma_id: Uuid,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            author_id: entity.author_id,
            soma_id: entity.soma_id,
            impressions: entity.impressions,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            body: self.body,
            author_id: self.author_id,
            soma_id: self.soma_id,
            impressions: self.impressions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A post together with the signed sum of its votes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPost {
    pub post: Post,
    pub score: i64,
}

impl ScoredPost {
    pub fn into_dto(self) -> ScoredPostDto {
        ScoredPostDto {
            post: self.post.into_dto(),
            score: self.score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParam {
    pub author_id: Uuid,
    pub soma_id: Uuid,
    pub title: String,
    pub body: Option<String>,
}

impl CreatePostParam {
    pub fn from_dto(author_id: Uuid, dto: CreatePostDto) -> Self {
        Self {
            author_id,
            soma_id: dto.soma_id,
            title: dto.title,
            body: dto.body,
        }
    }
}

/// Partial post update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParam {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl From<UpdatePostDto> for UpdatePostParam {
    fn from(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
        }
    }
}
