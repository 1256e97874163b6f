//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard` when it needs a user, converts the
//! request DTO into operation parameters, calls one service, and converts the result
//! back to a DTO. Every handler carries a `#[utoipa::path]` so the router can publish
//! the OpenAPI document.

pub mod award;
pub mod comment;
pub mod feed;
pub mod media;
pub mod notification;
pub mod post;
pub mod soma;
pub mod user;
pub mod vote;
