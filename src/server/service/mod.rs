//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. They resolve targets,
//! enforce authorization on individual pieces of content, open transactions for
//! operations with more than one write, and trigger notifications as a best-effort
//! side effect.

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
