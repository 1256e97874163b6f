//! Soma factory for creating test communities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct SomaFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    name: String,
    description: Option<String>,
}

impl<'a> SomaFactory<'a> {
    /// Defaults to slug `"soma-{n}"` and name `"Soma {n}"` with no description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            slug: format!("soma-{}", n),
            name: format!("Soma {}", n),
            description: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::soma::Model, DbErr> {
        entity::soma::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            slug: ActiveValue::Set(self.slug),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_soma(db: &DatabaseConnection) -> Result<entity::soma::Model, DbErr> {
    SomaFactory::new(db).build().await
}
