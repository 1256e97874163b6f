use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::award::AwardRepository,
    error::AppError,
    model::{
        award::{Award, CreateAwardParam},
        notification::CreateNotificationParam,
        target::Target,
    },
    service::{
        notification::{dispatch_best_effort, NotificationDispatcher, NotificationSink},
        target::TargetResolver,
    },
};

pub struct AwardService<'a, S = NotificationDispatcher> {
    db: &'a DatabaseConnection,
    sink: S,
}

impl<'a> AwardService<'a, NotificationDispatcher> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_sink(db, NotificationDispatcher)
    }
}

impl<'a, S: NotificationSink> AwardService<'a, S> {
    pub fn with_sink(db: &'a DatabaseConnection, sink: S) -> Self {
        Self { db, sink }
    }

    /// Grants a named award to a post or comment.
    ///
    /// The target's author is notified unless they awarded themselves. The award insert
    /// and the notification share a transaction, but a failed notification never fails
    /// the award.
    ///
    /// # Returns
    /// - `Ok(Award)` - Created award
    /// - `Err(AppError::BadRequest)` - Empty award name
    /// - `Err(AppError::TargetErr)` - Target does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateAwardParam) -> Result<Award, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Award name must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let resolved = TargetResolver::new(&txn).resolve(param.target).await?;
        let award = AwardRepository::new(&txn).create(param).await?;

        if resolved.author_id != award.awarded_by_id {
            dispatch_best_effort(
                &txn,
                &self.sink,
                CreateNotificationParam::award(resolved.author_id, award.target, &award.name),
            )
            .await;
        }

        txn.commit().await?;

        tracing::info!(
            "User {} awarded \"{}\" to {:?}",
            award.awarded_by_id,
            award.name,
            award.target
        );

        Ok(award)
    }

    /// Gets awards on a post, newest first.
    pub async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Award>, AppError> {
        Ok(AwardRepository::new(self.db)
            .get_by_target(Target::Post(post_id))
            .await?)
    }

    /// Gets awards on a comment, newest first.
    pub async fn list_by_comment(&self, comment_id: Uuid) -> Result<Vec<Award>, AppError> {
        Ok(AwardRepository::new(self.db)
            .get_by_target(Target::Comment(comment_id))
            .await?)
    }
}
