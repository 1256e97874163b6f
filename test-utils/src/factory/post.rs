//! Post factory for creating test posts.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test posts.
///
/// `created_at` can be overridden so feed and ranking tests control ordering
/// without sleeping between inserts.
///
/// # Example
///
/// ```rust,ignore
/// let older = PostFactory::new(&db, author.id, soma.id)
///     .created_at(Utc::now() - Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: Uuid,
    soma_id: Uuid,
    title: String,
    body: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Defaults to title `"Post {n}"`, a short body, and `created_at = now`.
    pub fn new(db: &'a DatabaseConnection, author_id: Uuid, soma_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            author_id,
            soma_id,
            title: format!("Post {}", n),
            body: Some(format!("Body of post {}", n)),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            author_id: ActiveValue::Set(self.author_id),
            soma_id: ActiveValue::Set(self.soma_id),
            impressions: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_post(
    db: &DatabaseConnection,
    author_id: Uuid,
    soma_id: Uuid,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id, soma_id).build().await
}
