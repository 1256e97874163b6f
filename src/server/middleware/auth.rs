//! Authentication guard and role checks.
//!
//! Controllers call `AuthGuard::require` at the top of every mutating handler. The guard
//! resolves the session's user id to a database user, then checks each requested
//! permission in order. Ownership checks on individual posts, comments and media go
//! through `can_mutate` so every entity applies the same author-or-admin rule.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;
use uuid::Uuid;

use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Actor, User},
};

pub enum Permission {
    /// The user's role must be one of the listed roles.
    Role(&'static [UserRole]),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session's user and verifies every permission.
    ///
    /// An empty permission list only requires an authenticated user that still exists.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Anonymous request
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - First unmet permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Role(roles) => {
                    if !roles.contains(&user.role) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User has role {:?} but one of {:?} is required",
                                user.role, roles
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Returns whether the actor may update or delete content written by `author_id`.
///
/// Evaluated against the author stored at request time.
pub fn can_mutate(actor_id: Uuid, actor_role: UserRole, author_id: Uuid) -> bool {
    actor_id == author_id || actor_role == UserRole::Admin
}

/// Fails with `AccessDenied` unless `can_mutate` holds.
///
/// # Arguments
/// - `actor` - Identity performing the mutation
/// - `author_id` - Current author of the content
/// - `what` - Short description of the content for the server-side log, e.g. `"comment 1234"`
pub fn ensure_can_mutate(actor: &Actor, author_id: Uuid, what: &str) -> Result<(), AuthError> {
    if can_mutate(actor.id, actor.role, author_id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        actor.id,
        format!("User is neither the author of {} nor an admin", what),
    ))
}
