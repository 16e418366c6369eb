//! GetUser: load one account by id.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use hireboard_core::guard::GuardFailure;
use hireboard_core::{
    DomainFailure, RepositoryResultExt, UseCase, UseCaseResult, UserId, ValidationError, fail, ok,
    try_outcome,
};

use crate::ports::UserRepository;
use crate::user::User;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUserDto {
    pub user_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("user {user_id} not found")]
    UserNotFound { user_id: String },
}

impl From<GuardFailure> for GetUserError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl DomainFailure for GetUserError {
    fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Validation(err) => Cow::Borrowed(err.code()),
            Self::UserNotFound { .. } => Cow::Borrowed("UserNotFoundError"),
        }
    }

    fn payload(&self) -> Option<JsonValue> {
        match self {
            Self::Validation(_) => None,
            Self::UserNotFound { user_id } => Some(json!({ "userId": user_id })),
        }
    }
}

pub struct GetUser {
    users: Arc<dyn UserRepository>,
}

impl GetUser {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UseCase for GetUser {
    type Request = GetUserDto;
    type Response = User;
    type Error = GetUserError;

    async fn execute(&self, dto: GetUserDto) -> UseCaseResult<User, GetUserError> {
        let user_id = try_outcome!(UserId::parse(&dto.user_id));

        match self.users.get_user_by_user_id(&user_id).await.optional()? {
            Some(user) => Ok(ok(user)),
            None => Ok(fail(GetUserError::UserNotFound {
                user_id: user_id.to_string(),
            })),
        }
    }
}
