//! Repository ports consumed by the user and role use cases.
//!
//! Adapters (in-memory, Postgres) live in `hireboard-infra`. Reads that miss
//! return [`RepositoryError::NotFound`]; use cases decide whether that means
//! "absent" or a declared domain error.

use std::sync::Arc;

use async_trait::async_trait;

use hireboard_core::{RepositoryError, RoleId, UserId};

use crate::role::{Role, RoleName};
use crate::user::{Email, User, Username};

/// Persistence contract for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether an account with this email exists.
    async fn exists(&self, email: &Email) -> Result<bool, RepositoryError>;

    async fn get_user_by_username(&self, username: &Username) -> Result<User, RepositoryError>;

    async fn get_user_by_user_id(&self, user_id: &UserId) -> Result<User, RepositoryError>;

    /// Store a new user.
    ///
    /// Re-checks the email first and silently does nothing when an account
    /// with that email already exists (first write wins).
    async fn persist(&self, user: &User) -> Result<(), RepositoryError>;
}

/// Persistence contract for roles.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Whether a role with this name exists.
    async fn exists(&self, name: &RoleName) -> Result<bool, RepositoryError>;

    async fn get_role_by_id(&self, role_id: &RoleId) -> Result<Role, RepositoryError>;

    /// Store a new role; no-op when the name is already taken (first write wins).
    async fn persist(&self, role: &Role) -> Result<(), RepositoryError>;

    /// Remove a role. Removing an absent role is a no-op.
    async fn delete(&self, role_id: &RoleId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R> UserRepository for Arc<R>
where
    R: UserRepository + ?Sized,
{
    async fn exists(&self, email: &Email) -> Result<bool, RepositoryError> {
        (**self).exists(email).await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, RepositoryError> {
        (**self).get_user_by_username(username).await
    }

    async fn get_user_by_user_id(&self, user_id: &UserId) -> Result<User, RepositoryError> {
        (**self).get_user_by_user_id(user_id).await
    }

    async fn persist(&self, user: &User) -> Result<(), RepositoryError> {
        (**self).persist(user).await
    }
}

#[async_trait]
impl<R> RoleRepository for Arc<R>
where
    R: RoleRepository + ?Sized,
{
    async fn exists(&self, name: &RoleName) -> Result<bool, RepositoryError> {
        (**self).exists(name).await
    }

    async fn get_role_by_id(&self, role_id: &RoleId) -> Result<Role, RepositoryError> {
        (**self).get_role_by_id(role_id).await
    }

    async fn persist(&self, role: &Role) -> Result<(), RepositoryError> {
        (**self).persist(role).await
    }

    async fn delete(&self, role_id: &RoleId) -> Result<(), RepositoryError> {
        (**self).delete(role_id).await
    }
}
