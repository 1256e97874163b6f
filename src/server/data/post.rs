//! Post data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait,
    ActiveValue,
    ColumnTrait,
    ConnectionTrait,
    DbErr,
    EntityTrait,
    IntoActiveModel,
    QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::post::{CreatePostParam, Post, UpdatePostParam};

pub struct PostRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePostParam) -> Result<Post, DbErr> {
        let now = Utc::now();
        let entity = entity::post::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            author_id: ActiveValue::Set(param.author_id),
            soma_id: ActiveValue::Set(param.soma_id),
            impressions: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    pub async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets posts by id in no particular order.
    pub async fn find_by_ids(&self, post_ids: Vec<Uuid>) -> Result<Vec<Post>, DbErr> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.is_in(post_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Increments the impressions counter in a single statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No post with that id
    pub async fn increment_impressions(&self, post_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::update_many()
            .col_expr(
                entity::post::Column::Impressions,
                Expr::col(entity::post::Column::Impressions).add(1),
            )
            .filter(entity::post::Column::Id.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all posts in a soma, newest first.
    pub async fn get_by_soma(&self, soma_id: Uuid) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::SomaId.eq(soma_id))
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Post)` - Updated post
    /// - `Err(DbErr::RecordNotFound)` - No post with that id
    pub async fn update(&self, post_id: Uuid, param: UpdatePostParam) -> Result<Post, DbErr> {
        let post = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Post {} not found", post_id)))?;

        let mut active_model = post.into_active_model();

        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(body) = param.body {
            active_model.body = ActiveValue::Set(Some(body));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Post::from_entity(updated))
    }

    /// Deletes a post. Comments and media cascade through foreign keys.
    pub async fn delete(&self, post_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(post_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
