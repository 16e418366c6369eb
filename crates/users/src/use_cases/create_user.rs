//! CreateUser: register a new account.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use hireboard_core::guard::{GuardChain, GuardFailure, against_empty_bulk, against_missing};
use hireboard_core::{
    DomainFailure, RepositoryResultExt, RoleId, UseCase, UseCaseResult, UserId, ValidationError,
    fail, ok, try_outcome,
};

use crate::ports::UserRepository;
use crate::user::{ContextType, Email, Password, User, UserProps, Username};

/// Inbound payload, already deserialized but not yet trusted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub context_type: Option<String>,
    pub role_ids: Vec<String>,
}

/// Everything [`CreateUser`] can fail with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("the email {email} associated for this account already exists")]
    EmailAlreadyExists { email: String },

    #[error("the username {username} was already taken")]
    UsernameTaken { username: String },
}

impl From<GuardFailure> for CreateUserError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl DomainFailure for CreateUserError {
    fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Validation(err) => Cow::Borrowed(err.code()),
            Self::EmailAlreadyExists { .. } => Cow::Borrowed("EmailAlreadyExistsError"),
            Self::UsernameTaken { .. } => Cow::Borrowed("UsernameTakenError"),
        }
    }

    fn payload(&self) -> Option<JsonValue> {
        match self {
            Self::Validation(_) => None,
            Self::EmailAlreadyExists { email } => Some(json!({ "email": email })),
            Self::UsernameTaken { username } => Some(json!({ "username": username })),
        }
    }
}

pub struct CreateUser {
    users: Arc<dyn UserRepository>,
}

impl CreateUser {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UseCase for CreateUser {
    type Request = CreateUserDto;
    type Response = User;
    type Error = CreateUserError;

    async fn execute(&self, dto: CreateUserDto) -> UseCaseResult<User, CreateUserError> {
        // 1) Required fields, then every field shape, before any read.
        try_outcome!(
            GuardChain::new()
                .check(|| against_empty_bulk([
                    (dto.username.as_str(), "username"),
                    (dto.email.as_str(), "email"),
                    (dto.password.as_str(), "password"),
                ]))
                .check(|| against_missing(dto.context_type.as_deref(), "contextType"))
                .finish()
        );
        let email = try_outcome!(Email::new(&dto.email));
        let username = try_outcome!(Username::new(&dto.username));
        try_outcome!(Password::new(&dto.password));
        try_outcome!(ContextType::parse(dto.context_type.as_deref().unwrap_or_default()));
        let role_ids = try_outcome!(
            dto.role_ids
                .iter()
                .map(|raw| RoleId::parse(raw))
                .collect::<Result<Vec<_>, _>>()
        );

        // 2) Preconditions.
        if self.users.exists(&email).await? {
            return Ok(fail(CreateUserError::EmailAlreadyExists {
                email: email.as_str().to_string(),
            }));
        }
        if self.users.get_user_by_username(&username).await.optional()?.is_some() {
            return Ok(fail(CreateUserError::UsernameTaken {
                username: username.as_str().to_string(),
            }));
        }

        // 3) Entity factory re-validates everything.
        let user = try_outcome!(User::create(
            UserId::new(),
            UserProps {
                username: dto.username,
                email: dto.email,
                password: dto.password,
                context_type: dto.context_type.unwrap_or_default(),
                role_ids,
                created_at: Utc::now(),
            },
        ));

        // 4) Persist (no-op if the email appeared since step 2).
        self.users.persist(&user).await?;

        Ok(ok(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingUserRepository, sample_user};

    fn dto(username: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            email: "bob@bob.com".to_string(),
            password: "test123".to_string(),
            context_type: Some("brand".to_string()),
            role_ids: vec![RoleId::new().to_string()],
        }
    }

    fn use_case(repo: &Arc<RecordingUserRepository>) -> CreateUser {
        CreateUser::new(repo.clone())
    }

    #[tokio::test]
    async fn returns_validation_error_when_dto_is_invalid() {
        let repo = Arc::new(RecordingUserRepository::default());
        let input = CreateUserDto {
            username: String::new(),
            email: "bob@bob.com".to_string(),
            password: "test123".to_string(),
            ..Default::default()
        };

        let result = use_case(&repo).execute(input).await.unwrap();

        match result {
            Err(CreateUserError::Validation(err)) => assert_eq!(err.code(), "username.required"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn every_missing_required_field_reports_its_code_without_touching_storage() {
        let cases = [
            (CreateUserDto { email: String::new(), ..dto("bob") }, "email.required"),
            (CreateUserDto { password: " ".to_string(), ..dto("bob") }, "password.required"),
            (CreateUserDto { context_type: None, ..dto("bob") }, "contextType.required"),
            (CreateUserDto { email: "bob".to_string(), ..dto("bob") }, "email.invalidFormat"),
            (
                CreateUserDto { role_ids: vec!["x".to_string()], ..dto("bob") },
                "roleId.invalidFormat",
            ),
        ];

        for (input, code) in cases {
            let repo = Arc::new(RecordingUserRepository::default());
            let err = use_case(&repo).execute(input).await.unwrap().unwrap_err();
            assert_eq!(err.code(), code);
            assert!(matches!(err, CreateUserError::Validation(_)));
            assert!(repo.persisted().is_empty());
        }
    }

    #[tokio::test]
    async fn invalid_password_and_context_type_win_over_an_existing_email() {
        let cases = [
            (CreateUserDto { password: "123".to_string(), ..dto("bob") }, "password.tooShort"),
            (
                CreateUserDto { context_type: Some("admin".to_string()), ..dto("bob") },
                "contextType.notAllowed",
            ),
        ];

        for (input, code) in cases {
            let repo = Arc::new(RecordingUserRepository {
                exists: true,
                ..Default::default()
            });
            let err = use_case(&repo).execute(input).await.unwrap().unwrap_err();
            assert!(matches!(err, CreateUserError::Validation(_)));
            assert_eq!(err.code(), code);
            assert!(repo.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn returns_email_already_exists_when_user_already_exists() {
        let repo = Arc::new(RecordingUserRepository {
            exists: true,
            ..Default::default()
        });

        let err = use_case(&repo).execute(dto("bob")).await.unwrap().unwrap_err();

        assert_eq!(
            err,
            CreateUserError::EmailAlreadyExists {
                email: "bob@bob.com".to_string()
            }
        );
        assert_eq!(err.code(), "EmailAlreadyExistsError");
        assert_eq!(err.payload(), Some(json!({ "email": "bob@bob.com" })));
        assert!(repo.persisted().is_empty());
    }

    #[tokio::test]
    async fn returns_username_taken_when_username_is_taken() {
        let repo = Arc::new(RecordingUserRepository {
            by_username: Some(sample_user("bob")),
            ..Default::default()
        });

        let err = use_case(&repo).execute(dto("bob")).await.unwrap().unwrap_err();

        assert_eq!(err.code(), "UsernameTakenError");
        assert!(repo.persisted().is_empty());
    }

    #[tokio::test]
    async fn returns_user_and_persists_it_once() {
        let repo = Arc::new(RecordingUserRepository::default());
        let input = dto("bob");
        let role_id = input.role_ids[0].clone();

        let user = use_case(&repo).execute(input).await.unwrap().unwrap();

        assert_eq!(user.username().as_str(), "bob");
        assert_eq!(user.email().as_str(), "bob@bob.com");
        assert_eq!(user.password().expose(), "test123");
        assert_eq!(user.role_ids()[0].to_string(), role_id);
        assert_eq!(repo.persisted(), vec![user]);
        assert_eq!(
            repo.calls(),
            ["exists", "get_user_by_username", "persist"]
        );
    }

    #[tokio::test]
    async fn storage_outage_is_not_a_domain_failure() {
        let repo = Arc::new(RecordingUserRepository {
            unavailable: true,
            ..Default::default()
        });

        let result = use_case(&repo).execute(dto("bob")).await;

        assert!(result.is_err());
        assert!(repo.persisted().is_empty());
    }
}
