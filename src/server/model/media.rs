//! Media metadata attached to posts.
//!
//! Binary storage and upload URLs live outside this service; only the resulting
//! `(type, url, metadata)` rows are recorded here.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MediaType;
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::{
    model::media::{AttachMediaItemDto, MediaCollectionDto, MediaItemDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: Uuid,
    pub media_type: MediaType,
    pub original_url: String,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn from_entity(entity: entity::media_item::Model) -> Self {
        Self {
            id: entity.id,
            media_type: entity.media_type,
            original_url: entity.original_url,
            metadata: entity.metadata,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MediaItemDto {
        MediaItemDto {
            id: self.id,
            media_type: self.media_type.to_value(),
            original_url: self.original_url,
            metadata: self.metadata,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaCollection {
    pub id: Uuid,
    pub post_id: Uuid,
    pub items: Vec<MediaItem>,
}

impl MediaCollection {
    pub fn into_dto(self) -> MediaCollectionDto {
        MediaCollectionDto {
            id: self.id,
            post_id: self.post_id,
            items: self.items.into_iter().map(MediaItem::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMediaItem {
    pub media_type: MediaType,
    pub original_url: String,
    pub metadata: Option<serde_json::Value>,
}

impl NewMediaItem {
    /// Validates the media type string.
    ///
    /// # Returns
    /// - `Ok(NewMediaItem)` - Type is `IMAGE`, `VIDEO` or `AUDIO`
    /// - `Err(AppError::BadRequest)` - Any other type
    pub fn from_dto(dto: AttachMediaItemDto) -> Result<Self, AppError> {
        let media_type = MediaType::try_from_value(&dto.media_type).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid media type '{}', expected IMAGE, VIDEO or AUDIO",
                dto.media_type
            ))
        })?;

        Ok(Self {
            media_type,
            original_url: dto.original_url,
            metadata: dto.metadata,
        })
    }
}
