//! SeaORM entity definitions for the soma database schema.

pub mod prelude;

pub mod award;
pub mod comment;
pub mod media_collection;
pub mod media_item;
pub mod notification;
pub mod post;
pub mod sea_orm_active_enums;
pub mod soma;
pub mod user;
pub mod vote;
