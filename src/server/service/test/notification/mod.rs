use crate::server::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::notification::CreateNotificationParam,
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod mark_read;
