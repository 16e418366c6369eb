use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireboard_core::guard::{
    GuardChain, GuardFailure, against_empty, against_too_long, against_too_short,
};
use hireboard_core::{Entity, RoleId, ValueObject};

pub const ROLE_NAME_MIN: usize = 2;
pub const ROLE_NAME_MAX: usize = 64;
pub const PERMISSION_MAX: usize = 128;

/// Human-facing role name, unique across roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(raw: &str) -> Result<Self, GuardFailure> {
        let value = raw.trim();
        GuardChain::new()
            .check(|| against_empty(value, "name"))
            .check(|| against_too_short(value, ROLE_NAME_MIN, "name"))
            .check(|| against_too_long(value, ROLE_NAME_MAX, "name"))
            .finish()?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for RoleName {}

impl core::fmt::Display for RoleName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Permission identifier.
///
/// Permissions are opaque dotted strings (e.g. "offers.create"); interpreting
/// them is the authorization collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(raw: &str) -> Result<Self, GuardFailure> {
        let value = raw.trim();
        GuardChain::new()
            .check(|| against_empty(value, "permissions"))
            .check(|| against_too_long(value, PERMISSION_MAX, "permissions"))
            .finish()?;
        Ok(Self(Cow::Owned(value.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Permission {}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw input for [`Role::create`].
#[derive(Debug, Clone)]
pub struct RoleProps {
    pub name: String,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Named bundle of permissions assignable to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: RoleId,
    name: RoleName,
    permissions: Vec<Permission>,
    created_at: DateTime<Utc>,
}

impl Role {
    pub fn create(id: RoleId, props: RoleProps) -> Result<Self, GuardFailure> {
        let name = RoleName::new(&props.name)?;

        let mut permissions: Vec<Permission> = Vec::with_capacity(props.permissions.len());
        for raw in &props.permissions {
            let permission = Permission::new(raw)?;
            if !permissions.contains(&permission) {
                permissions.push(permission);
            }
        }

        Ok(Self {
            id,
            name,
            permissions,
            created_at: props.created_at,
        })
    }

    pub fn name(&self) -> &RoleName {
        &self.name
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Role {
    type Id = RoleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
