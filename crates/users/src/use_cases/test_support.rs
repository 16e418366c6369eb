//! Recording repository stubs for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use hireboard_core::{RepositoryError, RoleId, UserId};

use crate::ports::{RoleRepository, UserRepository};
use crate::role::{Role, RoleName, RoleProps};
use crate::user::{Email, User, UserProps, Username};

pub(crate) fn sample_user(username: &str) -> User {
    User::create(
        UserId::new(),
        UserProps {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "secret1".to_string(),
            context_type: "candidate".to_string(),
            role_ids: vec![],
            created_at: Utc::now(),
        },
    )
    .unwrap()
}

pub(crate) fn sample_role(name: &str) -> Role {
    Role::create(
        RoleId::new(),
        RoleProps {
            name: name.to_string(),
            permissions: vec!["offers.create".to_string()],
            created_at: Utc::now(),
        },
    )
    .unwrap()
}

fn outage() -> RepositoryError {
    RepositoryError::backend(anyhow::anyhow!("connection refused"))
}

/// Canned answers for every read, records every call and every persisted user.
#[derive(Default)]
pub(crate) struct RecordingUserRepository {
    pub exists: bool,
    pub by_username: Option<User>,
    pub by_id: Option<User>,
    pub unavailable: bool,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) persisted: Mutex<Vec<User>>,
}

impl RecordingUserRepository {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn persisted(&self) -> Vec<User> {
        self.persisted.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), RepositoryError> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable {
            return Err(outage());
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for RecordingUserRepository {
    async fn exists(&self, _email: &Email) -> Result<bool, RepositoryError> {
        self.record("exists")?;
        Ok(self.exists)
    }

    async fn get_user_by_username(&self, _username: &Username) -> Result<User, RepositoryError> {
        self.record("get_user_by_username")?;
        self.by_username
            .clone()
            .ok_or_else(|| RepositoryError::not_found("user"))
    }

    async fn get_user_by_user_id(&self, _user_id: &UserId) -> Result<User, RepositoryError> {
        self.record("get_user_by_user_id")?;
        self.by_id
            .clone()
            .ok_or_else(|| RepositoryError::not_found("user"))
    }

    async fn persist(&self, user: &User) -> Result<(), RepositoryError> {
        self.record("persist")?;
        self.persisted.lock().unwrap().push(user.clone());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingRoleRepository {
    pub exists: bool,
    pub by_id: Option<Role>,
    pub unavailable: bool,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) persisted: Mutex<Vec<Role>>,
    pub(crate) deleted: Mutex<Vec<RoleId>>,
}

impl RecordingRoleRepository {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn persisted(&self) -> Vec<Role> {
        self.persisted.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<RoleId> {
        self.deleted.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), RepositoryError> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable {
            return Err(outage());
        }
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for RecordingRoleRepository {
    async fn exists(&self, _name: &RoleName) -> Result<bool, RepositoryError> {
        self.record("exists")?;
        Ok(self.exists)
    }

    async fn get_role_by_id(&self, _role_id: &RoleId) -> Result<Role, RepositoryError> {
        self.record("get_role_by_id")?;
        self.by_id
            .clone()
            .ok_or_else(|| RepositoryError::not_found("role"))
    }

    async fn persist(&self, role: &Role) -> Result<(), RepositoryError> {
        self.record("persist")?;
        self.persisted.lock().unwrap().push(role.clone());
        Ok(())
    }

    async fn delete(&self, role_id: &RoleId) -> Result<(), RepositoryError> {
        self.record("delete")?;
        self.deleted.lock().unwrap().push(*role_id);
        Ok(())
    }
}
