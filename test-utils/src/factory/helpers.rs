//! Shared helper utilities for factory methods.

use entity::{comment, post, soma, user};
use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique usernames, emails and slugs across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a post together with its author and soma.
///
/// # Returns
/// - `Ok((author, soma, post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(user::Model, soma::Model, post::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let soma = crate::factory::soma::create_soma(db).await?;
    let post = crate::factory::post::create_post(db, author.id, soma.id).await?;

    Ok((author, soma, post))
}

/// Creates a comment on a fresh post, returning every entity in the chain.
///
/// The comment is written by a different user than the post author.
///
/// # Returns
/// - `Ok((post_author, commenter, post, comment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(user::Model, user::Model, post::Model, comment::Model), DbErr> {
    let (post_author, _soma, post) = create_post_with_dependencies(db).await?;
    let commenter = crate::factory::user::create_user(db).await?;
    let comment = crate::factory::comment::create_comment(db, post.id, commenter.id).await?;

    Ok((post_author, commenter, post, comment))
}
