use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{media::MediaRepository, post::PostRepository},
    error::AppError,
    middleware::auth::ensure_can_mutate,
    model::{
        media::{MediaCollection, NewMediaItem},
        user::Actor,
    },
};

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends media metadata to a post's collection, creating the collection if needed.
    ///
    /// # Returns
    /// - `Ok(MediaCollection)` - The post's full collection after the append
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    /// - `Err(AppError::BadRequest)` - No items given
    pub async fn attach(
        &self,
        actor: &Actor,
        post_id: Uuid,
        items: Vec<NewMediaItem>,
    ) -> Result<MediaCollection, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with id '{}' not found", post_id)))?;
        ensure_can_mutate(actor, post.author_id, &format!("post {}", post_id))?;

        if items.is_empty() {
            return Err(AppError::BadRequest(
                "At least one media item is required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let repo = MediaRepository::new(&txn);

        let collection = repo.get_or_create_collection(post.id).await?;
        repo.add_items(collection.id, items).await?;

        txn.commit().await?;

        MediaRepository::new(self.db)
            .get_by_post(post.id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Media collection for post {} missing after attach",
                    post.id
                ))
            })
    }

    pub async fn get_by_post(&self, post_id: Uuid) -> Result<Option<MediaCollection>, AppError> {
        Ok(MediaRepository::new(self.db).get_by_post(post_id).await?)
    }
}
