//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` convenience
//! function for default creation. Factories insert directly through SeaORM active models,
//! bypassing the service layer, so tests can arrange state the service would reject.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (author, soma, post) = factory::helpers::create_post_with_dependencies(&db).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with a role
//! - `soma` - Communities
//! - `post` - Posts inside a soma
//! - `comment` - Top-level comments and replies
//! - `vote` - Votes on posts or comments
//! - `award` - Awards on posts or comments
//! - `helpers` - ID generation and dependency chains

pub mod award;
pub mod comment;
pub mod helpers;
pub mod post;
pub mod soma;
pub mod user;
pub mod vote;

pub use award::create_award;
pub use comment::create_comment;
pub use post::create_post;
pub use soma::create_soma;
pub use user::create_user;
pub use vote::create_vote;
