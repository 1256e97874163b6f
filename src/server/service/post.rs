use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        award::AwardRepository, comment::CommentRepository, post::PostRepository,
        soma::SomaRepository, vote::VoteRepository,
    },
    error::AppError,
    middleware::auth::ensure_can_mutate,
    model::{
        post::{CreatePostParam, Post, UpdatePostParam},
        target::Target,
        user::Actor,
    },
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post in an existing soma.
    ///
    /// Role requirements are enforced by the caller.
    ///
    /// # Returns
    /// - `Ok(Post)` - Created post
    /// - `Err(AppError::BadRequest)` - Empty title or unknown soma
    pub async fn create(&self, param: CreatePostParam) -> Result<Post, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Post title must not be empty".to_string(),
            ));
        }

        if SomaRepository::new(self.db)
            .find_by_id(param.soma_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Soma with id '{}' does not exist",
                param.soma_id
            )));
        }

        let post = PostRepository::new(self.db).create(param).await?;

        tracing::info!("User {} created post {}", post.author_id, post.id);

        Ok(post)
    }

    /// Gets a post and counts the read as an impression.
    ///
    /// # Returns
    /// - `Ok(Post)` - Post with the incremented impressions counter
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn get(&self, post_id: Uuid) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        if !repo.increment_impressions(post_id).await? {
            return Err(post_not_found(post_id));
        }

        repo.find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))
    }

    /// Gets every post in a soma, newest first.
    pub async fn list_by_soma(&self, soma_id: Uuid) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_by_soma(soma_id).await?)
    }

    /// Applies a partial update for the author or an admin.
    ///
    /// # Returns
    /// - `Ok(Post)` - Updated post
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    /// - `Err(AppError::BadRequest)` - Title set to an empty string
    pub async fn update(
        &self,
        actor: &Actor,
        post_id: Uuid,
        param: UpdatePostParam,
    ) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        let post = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        ensure_can_mutate(actor, post.author_id, &format!("post {}", post_id))?;

        if param.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Post title must not be empty".to_string(),
            ));
        }

        Ok(repo.update(post_id, param).await?)
    }

    /// Deletes a post for the author or an admin.
    ///
    /// Votes and awards on the post and on any of its comments are removed in the same
    /// transaction; comments and media go with the post through foreign keys.
    pub async fn remove(&self, actor: &Actor, post_id: Uuid) -> Result<(), AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        ensure_can_mutate(actor, post.author_id, &format!("post {}", post_id))?;

        let txn = self.db.begin().await?;

        let mut targets = vec![Target::Post(post.id)];
        targets.extend(
            CommentRepository::new(&txn)
                .get_by_post(post.id)
                .await?
                .into_iter()
                .map(|c| Target::Comment(c.id)),
        );

        VoteRepository::new(&txn).delete_by_targets(&targets).await?;
        AwardRepository::new(&txn)
            .delete_by_targets(&targets)
            .await?;
        PostRepository::new(&txn).delete(post.id).await?;

        txn.commit().await?;

        tracing::info!("User {} deleted post {}", actor.id, post.id);

        Ok(())
    }
}

fn post_not_found(post_id: Uuid) -> AppError {
    AppError::NotFound(format!("Post with id '{}' not found", post_id))
}
