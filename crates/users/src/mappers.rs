//! Persistence records for users and roles, and their mappers.
//!
//! Records are the storage shape (flat, primitive fields). Reconstitution goes
//! back through the entity factories, so a record that no longer satisfies the
//! entity invariants surfaces as `RepositoryError::Malformed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hireboard_core::{Entity, Mapper, RepositoryError, RoleId, UserId};

use crate::role::{Role, RoleProps};
use crate::user::{User, UserProps};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Stored shape of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub context_type: String,
    pub role_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

pub struct UserMapper;

impl Mapper for UserMapper {
    type Domain = User;
    type Record = UserRecord;

    fn to_domain(record: UserRecord) -> Result<User, RepositoryError> {
        User::create(
            UserId::from_uuid(record.user_id),
            UserProps {
                username: record.username,
                email: record.email,
                password: record.password,
                context_type: record.context_type,
                role_ids: record.role_ids.into_iter().map(RoleId::from_uuid).collect(),
                created_at: record.created_at,
            },
        )
        .map_err(|failure| RepositoryError::malformed("user", failure.code()))
    }

    fn to_persistence(user: &User) -> UserRecord {
        UserRecord {
            user_id: *user.id().as_uuid(),
            username: user.username().as_str().to_string(),
            email: user.email().as_str().to_string(),
            password: user.password().expose().to_string(),
            context_type: user.context_type().as_str().to_string(),
            role_ids: user.role_ids().iter().map(|id| *id.as_uuid()).collect(),
            created_at: user.created_at(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Roles
// ─────────────────────────────────────────────────────────────────────────────

/// Stored shape of a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role_id: Uuid,
    pub name: String,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub struct RoleMapper;

impl Mapper for RoleMapper {
    type Domain = Role;
    type Record = RoleRecord;

    fn to_domain(record: RoleRecord) -> Result<Role, RepositoryError> {
        Role::create(
            RoleId::from_uuid(record.role_id),
            RoleProps {
                name: record.name,
                permissions: record.permissions,
                created_at: record.created_at,
            },
        )
        .map_err(|failure| RepositoryError::malformed("role", failure.code()))
    }

    fn to_persistence(role: &Role) -> RoleRecord {
        RoleRecord {
            role_id: *role.id().as_uuid(),
            name: role.name().as_str().to_string(),
            permissions: role
                .permissions()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            created_at: role.created_at(),
        }
    }
}
