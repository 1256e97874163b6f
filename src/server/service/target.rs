//! Target resolution shared by every operation that votes on or awards content.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::target::TargetRepository,
    error::AppError,
    model::target::{ResolvedTarget, Target},
};

pub struct TargetResolver<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TargetResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a target to its current author.
    ///
    /// # Returns
    /// - `Ok(ResolvedTarget)` - Target exists
    /// - `Err(AppError::TargetErr(PostNotFound | CommentNotFound))` - No such row
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve(&self, target: Target) -> Result<ResolvedTarget, AppError> {
        TargetRepository::new(self.db)
            .find_author(target)
            .await?
            .ok_or_else(|| target.not_found().into())
    }
}
