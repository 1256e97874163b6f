//! Read-side queries for rankings and feeds.
//!
//! Everything here aggregates across the vote and award ledgers without writing. Batch
//! loaders take the exact set of post ids on a page and answer with one grouped query
//! each, so the number of queries per page does not depend on its size.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveEnum, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use uuid::Uuid;

use entity::sea_orm_active_enums::TargetType;

use crate::server::model::{feed::FeedMedia, post::Post, soma::SomaSummary, user::UserSummary};

pub struct FeedRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Signed vote sum for every post that has at least one vote.
    pub async fn post_scores(&self) -> Result<HashMap<Uuid, i64>, DbErr> {
        let rows: Vec<(Uuid, i64)> = entity::prelude::Vote::find()
            .select_only()
            .column(entity::vote::Column::TargetId)
            .column_as(entity::vote::Column::Value.sum(), "score")
            .filter(entity::vote::Column::TargetType.eq(TargetType::Post))
            .group_by(entity::vote::Column::TargetId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// `(id, created_at)` for every post; the ranking input besides scores.
    pub async fn post_timestamps(&self) -> Result<Vec<(Uuid, DateTime<Utc>)>, DbErr> {
        entity::prelude::Post::find()
            .select_only()
            .column(entity::post::Column::Id)
            .column(entity::post::Column::CreatedAt)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets up to `limit` posts ordered by `(created_at DESC, id DESC)`.
    ///
    /// # Arguments
    /// - `soma_id` - Restricts results to one soma when set
    /// - `after` - Post to continue after; only rows strictly later in the order are returned
    /// - `limit` - Maximum number of posts
    pub async fn get_page(
        &self,
        soma_id: Option<Uuid>,
        after: Option<&Post>,
        limit: u64,
    ) -> Result<Vec<Post>, DbErr> {
        let mut query = entity::prelude::Post::find();

        if let Some(soma_id) = soma_id {
            query = query.filter(entity::post::Column::SomaId.eq(soma_id));
        }

        if let Some(cursor) = after {
            query = query.filter(
                Condition::any()
                    .add(entity::post::Column::CreatedAt.lt(cursor.created_at))
                    .add(
                        Condition::all()
                            .add(entity::post::Column::CreatedAt.eq(cursor.created_at))
                            .add(entity::post::Column::Id.lt(cursor.id)),
                    ),
            );
        }

        let entities = query
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Vote sums for the given posts. Posts without votes are absent from the map.
    pub async fn vote_sums(&self, post_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = entity::prelude::Vote::find()
            .select_only()
            .column(entity::vote::Column::TargetId)
            .column_as(entity::vote::Column::Value.sum(), "vote_count")
            .filter(entity::vote::Column::TargetType.eq(TargetType::Post))
            .filter(entity::vote::Column::TargetId.is_in(post_ids.to_vec()))
            .group_by(entity::vote::Column::TargetId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Award counts for the given posts. Posts without awards are absent from the map.
    pub async fn award_counts(&self, post_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = entity::prelude::Award::find()
            .select_only()
            .column(entity::award::Column::TargetId)
            .column_as(entity::award::Column::Id.count(), "award_count")
            .filter(entity::award::Column::TargetType.eq(TargetType::Post))
            .filter(entity::award::Column::TargetId.is_in(post_ids.to_vec()))
            .group_by(entity::award::Column::TargetId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    pub async fn authors(&self, user_ids: Vec<Uuid>) -> Result<HashMap<Uuid, UserSummary>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|u| (u.id, UserSummary::from_entity(u)))
            .collect())
    }

    pub async fn somas(&self, soma_ids: Vec<Uuid>) -> Result<HashMap<Uuid, SomaSummary>, DbErr> {
        if soma_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let somas = entity::prelude::Soma::find()
            .filter(entity::soma::Column::Id.is_in(soma_ids))
            .all(self.db)
            .await?;

        Ok(somas
            .into_iter()
            .map(|s| (s.id, SomaSummary::from_entity(s)))
            .collect())
    }

    /// Flattened media per post. Posts without a collection are absent; a collection
    /// with no items maps to an empty list.
    pub async fn media(&self, post_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<FeedMedia>>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let collections = entity::prelude::MediaCollection::find()
            .filter(entity::media_collection::Column::PostId.is_in(post_ids.to_vec()))
            .all(self.db)
            .await?;

        if collections.is_empty() {
            return Ok(HashMap::new());
        }

        let post_by_collection: HashMap<Uuid, Uuid> =
            collections.iter().map(|c| (c.id, c.post_id)).collect();

        let collection_ids: Vec<Uuid> = post_by_collection.keys().copied().collect();

        let items = entity::prelude::MediaItem::find()
            .filter(entity::media_item::Column::CollectionId.is_in(collection_ids))
            .order_by_asc(entity::media_item::Column::CreatedAt)
            .order_by_asc(entity::media_item::Column::Id)
            .all(self.db)
            .await?;

        let mut media: HashMap<Uuid, Vec<FeedMedia>> = collections
            .iter()
            .map(|c| (c.post_id, Vec::new()))
            .collect();

        for item in items {
            if let Some(post_id) = post_by_collection.get(&item.collection_id) {
                media.entry(*post_id).or_default().push(FeedMedia {
                    media_type: item.media_type.to_value(),
                    original_url: item.original_url,
                });
            }
        }

        Ok(media)
    }
}
