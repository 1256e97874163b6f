//! Media collection persistence.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::media::{MediaCollection, MediaItem, NewMediaItem};

pub struct MediaRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MediaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the post's collection row, creating it on first use.
    pub async fn get_or_create_collection(
        &self,
        post_id: Uuid,
    ) -> Result<entity::media_collection::Model, DbErr> {
        if let Some(collection) = entity::prelude::MediaCollection::find()
            .filter(entity::media_collection::Column::PostId.eq(post_id))
            .one(self.db)
            .await?
        {
            return Ok(collection);
        }

        entity::media_collection::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            post_id: ActiveValue::Set(post_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Appends items to a collection in the given order.
    pub async fn add_items(
        &self,
        collection_id: Uuid,
        items: Vec<NewMediaItem>,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        // Items are read back ordered by `created_at`, so each gets a distinct stamp.
        for (position, item) in items.into_iter().enumerate() {
            entity::media_item::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                collection_id: ActiveValue::Set(collection_id),
                media_type: ActiveValue::Set(item.media_type),
                original_url: ActiveValue::Set(item.original_url),
                metadata: ActiveValue::Set(item.metadata),
                created_at: ActiveValue::Set(now + Duration::microseconds(position as i64)),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Gets a post's collection with its items, oldest first.
    ///
    /// # Returns
    /// - `Ok(Some(MediaCollection))` - Post has media
    /// - `Ok(None)` - Nothing was ever attached
    pub async fn get_by_post(&self, post_id: Uuid) -> Result<Option<MediaCollection>, DbErr> {
        let Some(collection) = entity::prelude::MediaCollection::find()
            .filter(entity::media_collection::Column::PostId.eq(post_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = entity::prelude::MediaItem::find()
            .filter(entity::media_item::Column::CollectionId.eq(collection.id))
            .order_by_asc(entity::media_item::Column::CreatedAt)
            .order_by_asc(entity::media_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(MediaCollection {
            id: collection.id,
            post_id: collection.post_id,
            items: items.into_iter().map(MediaItem::from_entity).collect(),
        }))
    }
}
