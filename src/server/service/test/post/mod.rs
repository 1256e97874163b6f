use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        post::{CreatePostParam, UpdatePostParam},
        user::Actor,
    },
    service::post::PostService,
};
use entity::sea_orm_active_enums::{TargetType, UserRole};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod remove;
mod update;
