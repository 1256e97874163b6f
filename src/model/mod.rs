//! Wire DTOs shared by the HTTP controllers.
//!
//! Every type here is what crosses the JSON boundary. Server-side domain models in
//! `server::model` convert into these with `into_dto`, and request DTOs are turned into
//! operation parameters by the controllers.

pub mod api;
pub mod award;
pub mod comment;
pub mod feed;
pub mod media;
pub mod notification;
pub mod post;
pub mod soma;
pub mod user;
pub mod vote;
