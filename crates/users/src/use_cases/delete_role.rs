//! DeleteRole: remove a role by id.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use hireboard_core::guard::GuardFailure;
use hireboard_core::{
    DomainFailure, RepositoryResultExt, RoleId, UseCase, UseCaseResult, ValidationError, fail, ok,
    try_outcome,
};

use crate::ports::RoleRepository;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRoleDto {
    pub role_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeleteRoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("role {role_id} not found")]
    RoleNotFound { role_id: String },
}

impl From<GuardFailure> for DeleteRoleError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl DomainFailure for DeleteRoleError {
    fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Validation(err) => Cow::Borrowed(err.code()),
            Self::RoleNotFound { .. } => Cow::Borrowed("RoleNotFoundError"),
        }
    }

    fn payload(&self) -> Option<JsonValue> {
        match self {
            Self::Validation(_) => None,
            Self::RoleNotFound { role_id } => Some(json!({ "roleId": role_id })),
        }
    }
}

pub struct DeleteRole {
    roles: Arc<dyn RoleRepository>,
}

impl DeleteRole {
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl UseCase for DeleteRole {
    type Request = DeleteRoleDto;
    type Response = ();
    type Error = DeleteRoleError;

    async fn execute(&self, dto: DeleteRoleDto) -> UseCaseResult<(), DeleteRoleError> {
        let role_id = try_outcome!(RoleId::parse(&dto.role_id));

        if self.roles.get_role_by_id(&role_id).await.optional()?.is_none() {
            return Ok(fail(DeleteRoleError::RoleNotFound {
                role_id: role_id.to_string(),
            }));
        }

        // A concurrent delete between the read and this call is harmless: the
        // adapter treats a missing row as already deleted.
        self.roles.delete(&role_id).await?;

        Ok(ok(()))
    }
}
