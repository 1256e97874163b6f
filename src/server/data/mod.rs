//! Data access layer.
//!
//! Each repository wraps a borrowed connection and exposes the queries one aggregate
//! needs. Repositories are generic over `ConnectionTrait` so the same code runs on the
//! pool or inside a transaction opened by a service. They return `DbErr` and convert
//! entities into domain models before handing them back.

pub mod award;
pub mod comment;
pub mod feed;
pub mod media;
pub mod notification;
pub mod post;
pub mod soma;
pub mod target;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
