//! Notification dispatch and the read/unread lifecycle.
//!
//! Services that notify take a `NotificationSink` so the side effect is an explicit
//! dependency. `dispatch_best_effort` runs the sink inside a savepoint of the caller's
//! transaction: a failing sink rolls back only its own writes, is logged, and never
//! reaches the caller.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::future::Future;
use uuid::Uuid;

use crate::server::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::notification::{CreateNotificationParam, Notification},
};

/// Destination for notifications raised by engagement on someone's content.
pub trait NotificationSink: Send + Sync {
    fn dispatch(
        &self,
        txn: &DatabaseTransaction,
        param: CreateNotificationParam,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Sink that stores notifications in the `notification` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationDispatcher;

impl NotificationSink for NotificationDispatcher {
    async fn dispatch(
        &self,
        txn: &DatabaseTransaction,
        param: CreateNotificationParam,
    ) -> Result<(), AppError> {
        NotificationRepository::new(txn).create(param).await?;
        Ok(())
    }
}

/// Sends a notification without letting its failure escape.
///
/// The sink runs in a savepoint nested in `txn`. On success the savepoint is released
/// into `txn`; on failure it is rolled back and the error is logged at `warn`.
pub async fn dispatch_best_effort<S: NotificationSink>(
    txn: &DatabaseTransaction,
    sink: &S,
    param: CreateNotificationParam,
) {
    let recipient = param.user_id;
    let kind = param.kind.clone();

    if let Err(err) = dispatch_in_savepoint(txn, sink, param).await {
        tracing::warn!(
            "Dropped {} notification for user {}: {}",
            kind,
            recipient,
            err
        );
    }
}

async fn dispatch_in_savepoint<S: NotificationSink>(
    txn: &DatabaseTransaction,
    sink: &S,
    param: CreateNotificationParam,
) -> Result<(), AppError> {
    let savepoint = txn.begin().await?;

    match sink.dispatch(&savepoint, param).await {
        Ok(()) => {
            savepoint.commit().await?;
            Ok(())
        }
        Err(err) => {
            savepoint.rollback().await?;
            Err(err)
        }
    }
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all notifications addressed to a user, newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Marks a notification read for its recipient.
    ///
    /// Marking an already-read notification stamps the current time again.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Notification with `read_at` set
    /// - `Err(AppError::NotFound)` - No notification with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Notification belongs to another user
    pub async fn mark_read(
        &self,
        actor_id: Uuid,
        notification_id: Uuid,
    ) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.find_by_id(notification_id).await?;
        let notification = notification.ok_or_else(|| {
            AppError::NotFound(format!("Notification {} not found", notification_id))
        })?;

        if notification.user_id != actor_id {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!(
                    "Attempted to mark notification {} of user {} as read",
                    notification_id, notification.user_id
                ),
            )
            .into());
        }

        Ok(repo.mark_read(notification_id, Utc::now()).await?)
    }
}
