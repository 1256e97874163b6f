//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary, services
//! operate on them, and controllers convert them to DTOs with `into_dto`. Parameter structs
//! (`*Param`) carry the already-validated input of a single operation.

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
