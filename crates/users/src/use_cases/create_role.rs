//! CreateRole: define a named permission bundle.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use hireboard_core::guard::{GuardFailure, against_empty};
use hireboard_core::{
    DomainFailure, RoleId, UseCase, UseCaseResult, ValidationError, fail, ok, try_outcome,
};

use crate::ports::RoleRepository;
use crate::role::{Permission, Role, RoleName, RoleProps};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRoleDto {
    pub name: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("the role {name} already exists")]
    RoleAlreadyExists { name: String },
}

impl From<GuardFailure> for CreateRoleError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl DomainFailure for CreateRoleError {
    fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Validation(err) => Cow::Borrowed(err.code()),
            Self::RoleAlreadyExists { .. } => Cow::Borrowed("RoleAlreadyExistsError"),
        }
    }

    fn payload(&self) -> Option<JsonValue> {
        match self {
            Self::Validation(_) => None,
            Self::RoleAlreadyExists { name } => Some(json!({ "name": name })),
        }
    }
}

pub struct CreateRole {
    roles: Arc<dyn RoleRepository>,
}

impl CreateRole {
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl UseCase for CreateRole {
    type Request = CreateRoleDto;
    type Response = Role;
    type Error = CreateRoleError;

    async fn execute(&self, dto: CreateRoleDto) -> UseCaseResult<Role, CreateRoleError> {
        try_outcome!(against_empty(&dto.name, "name"));
        let name = try_outcome!(RoleName::new(&dto.name));
        for raw in &dto.permissions {
            try_outcome!(Permission::new(raw));
        }

        if self.roles.exists(&name).await? {
            return Ok(fail(CreateRoleError::RoleAlreadyExists {
                name: name.as_str().to_string(),
            }));
        }

        let role = try_outcome!(Role::create(
            RoleId::new(),
            RoleProps {
                name: dto.name,
                permissions: dto.permissions,
                created_at: Utc::now(),
            },
        ));

        self.roles.persist(&role).await?;

        Ok(ok(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::RecordingRoleRepository;

    fn dto(name: &str) -> CreateRoleDto {
        CreateRoleDto {
            name: name.to_string(),
            permissions: vec!["offers.create".to_string(), "offers.delete".to_string()],
        }
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_any_read() {
        let repo = Arc::new(RecordingRoleRepository::default());

        let err = CreateRole::new(repo.clone())
            .execute(dto(""))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "name.required");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn duplicate_name_is_role_already_exists() {
        let repo = Arc::new(RecordingRoleRepository {
            exists: true,
            ..Default::default()
        });

        let err = CreateRole::new(repo.clone())
            .execute(dto("recruiter"))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "RoleAlreadyExistsError");
        assert!(repo.persisted().is_empty());
    }

    #[tokio::test]
    async fn invalid_permission_is_rejected_before_any_read() {
        let repo = Arc::new(RecordingRoleRepository::default());
        let input = CreateRoleDto {
            permissions: vec!["  ".to_string()],
            ..dto("recruiter")
        };

        let err = CreateRole::new(repo.clone())
            .execute(input)
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "permissions.required");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_permission_wins_over_an_existing_name() {
        let repo = Arc::new(RecordingRoleRepository {
            exists: true,
            ..Default::default()
        });
        let input = CreateRoleDto {
            name: "admin".to_string(),
            permissions: vec![String::new()],
        };

        let err = CreateRole::new(repo.clone())
            .execute(input)
            .await
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, CreateRoleError::Validation(_)));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn new_role_is_persisted_once() {
        let repo = Arc::new(RecordingRoleRepository::default());

        let role = CreateRole::new(repo.clone())
            .execute(dto("recruiter"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(role.name().as_str(), "recruiter");
        assert_eq!(role.permissions().len(), 2);
        assert_eq!(repo.persisted(), vec![role]);
    }
}
