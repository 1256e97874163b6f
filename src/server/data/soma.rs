use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::soma::{CreateSomaParam, Soma};

pub struct SomaRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SomaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a soma. The slug must already be normalized.
    pub async fn create(&self, param: CreateSomaParam) -> Result<Soma, DbErr> {
        let entity = entity::soma::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            slug: ActiveValue::Set(param.slug),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Soma::from_entity(entity))
    }

    pub async fn find_by_id(&self, soma_id: Uuid) -> Result<Option<Soma>, DbErr> {
        let entity = entity::prelude::Soma::find_by_id(soma_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Soma::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Soma>, DbErr> {
        let entity = entity::prelude::Soma::find()
            .filter(entity::soma::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Soma::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Soma::find()
            .filter(entity::soma::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every soma, newest first.
    pub async fn get_all(&self) -> Result<Vec<Soma>, DbErr> {
        let entities = entity::prelude::Soma::find()
            .order_by_desc(entity::soma::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Soma::from_entity).collect())
    }
}
