use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::CreateNotificationParam, service::notification::NotificationSink,
};
use sea_orm::DatabaseTransaction;

mod award;
mod comment;
mod notification;
mod post;

/// Sink that writes the notification and then fails, as a partially applied
/// downstream write would.
struct FailingSink;

impl NotificationSink for FailingSink {
    async fn dispatch(
        &self,
        txn: &DatabaseTransaction,
        param: CreateNotificationParam,
    ) -> Result<(), AppError> {
        NotificationRepository::new(txn).create(param).await?;
        Err(AppError::InternalError(
            "notification sink unavailable".to_string(),
        ))
    }
}
