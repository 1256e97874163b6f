use crate::server::{data::target::TargetRepository, model::target::Target};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod find_author;
