use super::FailingSink;
use crate::server::{
    data::notification::NotificationRepository,
    error::{target::TargetError, AppError},
    model::{award::CreateAwardParam, notification::KIND_AWARD, target::Target},
    service::award::AwardService,
};
use entity::sea_orm_active_enums::TargetType;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;
