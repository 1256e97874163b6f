use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::vote::VoteRepository,
    error::AppError,
    model::{
        target::Target,
        vote::{UpsertVoteParam, Vote},
    },
    service::target::TargetResolver,
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the user's vote on a target, replacing any earlier vote.
    ///
    /// The target must exist. The write itself is one atomic upsert on the composite key,
    /// so concurrent calls from the same user settle on a single row.
    ///
    /// # Returns
    /// - `Ok(Vote)` - The user's only vote on the target
    /// - `Err(AppError::TargetErr)` - Target does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn upsert(&self, param: UpsertVoteParam) -> Result<Vote, AppError> {
        TargetResolver::new(self.db).resolve(param.target).await?;

        let vote = VoteRepository::new(self.db).upsert(param).await?;

        Ok(vote)
    }

    /// Removes the user's vote on a target.
    ///
    /// Succeeds whether or not a vote existed; afterwards the user has no vote on it.
    pub async fn remove(&self, user_id: Uuid, target: Target) -> Result<(), AppError> {
        let removed = VoteRepository::new(self.db).delete(user_id, target).await?;

        if removed == 0 {
            tracing::debug!("No vote by {} on {:?} to remove", user_id, target);
        }

        Ok(())
    }
}
