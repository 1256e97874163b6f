//! Comment threads.
//!
//! Top-level comments notify the post's author. Replies are anchored to their parent's
//! post whatever the caller sent, and do not notify the parent comment's author.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::server::{
    data::{
        award::AwardRepository, comment::CommentRepository, post::PostRepository,
        vote::VoteRepository,
    },
    error::AppError,
    middleware::auth::ensure_can_mutate,
    model::{
        comment::{Comment, CreateCommentParam},
        notification::CreateNotificationParam,
        target::Target,
        user::Actor,
    },
    service::notification::{dispatch_best_effort, NotificationDispatcher, NotificationSink},
};

pub struct CommentService<'a, S = NotificationDispatcher> {
    db: &'a DatabaseConnection,
    sink: S,
}

impl<'a> CommentService<'a, NotificationDispatcher> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_sink(db, NotificationDispatcher)
    }
}

impl<'a, S: NotificationSink> CommentService<'a, S> {
    pub fn with_sink(db: &'a DatabaseConnection, sink: S) -> Self {
        Self { db, sink }
    }

    /// Creates a top-level comment on a post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Created comment with no parent
    /// - `Err(AppError::BadRequest)` - Post does not exist or content is empty
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        content: String,
    ) -> Result<Comment, AppError> {
        validate_content(&content)?;

        let txn = self.db.begin().await?;

        let post = PostRepository::new(&txn)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Post with id '{}' does not exist", post_id))
            })?;

        let comment = CommentRepository::new(&txn)
            .create(CreateCommentParam {
                author_id,
                post_id: post.id,
                parent_comment_id: None,
                content,
            })
            .await?;

        if post.author_id != author_id {
            dispatch_best_effort(
                &txn,
                &self.sink,
                CreateNotificationParam::comment_on_post(post.author_id, post.id, &post.title),
            )
            .await;
        }

        txn.commit().await?;

        Ok(comment)
    }

    /// Replies to an existing comment.
    ///
    /// The reply's post is always the parent's post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Created reply
    /// - `Err(AppError::BadRequest)` - Parent does not exist or content is empty
    pub async fn reply(
        &self,
        author_id: Uuid,
        parent_comment_id: Uuid,
        content: String,
    ) -> Result<Comment, AppError> {
        validate_content(&content)?;

        let repo = CommentRepository::new(self.db);

        let parent = repo.find_by_id(parent_comment_id).await?;
        let parent = parent.ok_or_else(|| {
            AppError::BadRequest(format!(
                "Parent comment with id '{}' does not exist",
                parent_comment_id
            ))
        })?;

        let reply = repo
            .create(CreateCommentParam {
                author_id,
                post_id: parent.post_id,
                parent_comment_id: Some(parent.id),
                content,
            })
            .await?;

        Ok(reply)
    }

    /// Gets every comment on a post, oldest first, flat.
    pub async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).get_by_post(post_id).await?)
    }

    /// Replaces a comment's content.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Updated comment
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    pub async fn update(
        &self,
        actor: &Actor,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = find_comment(&repo, comment_id).await?;
        let resource = format!("comment {}", comment_id);
        ensure_can_mutate(actor, comment.author_id, &resource)?;
        validate_content(&content)?;

        Ok(repo.update_content(comment_id, content).await?)
    }

    /// Deletes a comment and its replies along with their votes and awards.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    pub async fn remove(&self, actor: &Actor, comment_id: Uuid) -> Result<(), AppError> {
        let comment = find_comment(&CommentRepository::new(self.db), comment_id).await?;
        let resource = format!("comment {}", comment_id);
        ensure_can_mutate(actor, comment.author_id, &resource)?;

        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        let thread = repo.get_by_post(comment.post_id).await?;
        let targets: Vec<Target> = subtree_ids(&thread, comment.id)
            .into_iter()
            .map(Target::Comment)
            .collect();

        VoteRepository::new(&txn).delete_by_targets(&targets).await?;
        AwardRepository::new(&txn)
            .delete_by_targets(&targets)
            .await?;
        repo.delete(comment.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

async fn find_comment<C: sea_orm::ConnectionTrait>(
    repo: &CommentRepository<'_, C>,
    comment_id: Uuid,
) -> Result<Comment, AppError> {
    repo.find_by_id(comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Comment with id '{}' not found", comment_id)))
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Ids of `root` and every comment below it in the thread.
fn subtree_ids(thread: &[Comment], root: Uuid) -> Vec<Uuid> {
    let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for comment in thread {
        if let Some(parent) = comment.parent_comment_id {
            children.entry(parent).or_default().push(comment.id);
        }
    }

    let mut seen = HashSet::new();
    let mut stack = vec![root];
    let mut ids = Vec::new();

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        ids.push(id);
        if let Some(kids) = children.get(&id) {
            stack.extend(kids.iter().copied());
        }
    }

    ids
}
