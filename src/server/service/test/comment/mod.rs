use super::FailingSink;
use crate::server::{
    data::{comment::CommentRepository, notification::NotificationRepository},
    error::{auth::AuthError, AppError},
    model::{notification::KIND_COMMENT, target::Target, user::Actor},
    service::comment::CommentService,
};
use entity::sea_orm_active_enums::{TargetType, UserRole};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod remove;
mod reply;
mod update;
