//! User entity and its value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireboard_core::guard::{
    GuardChain, GuardFailure, against_empty, against_invalid_email, against_too_long,
    against_too_short, is_one_of,
};
use hireboard_core::{Entity, RoleId, UserId, ValueObject};

// ─────────────────────────────────────────────────────────────────────────────
// Value objects
// ─────────────────────────────────────────────────────────────────────────────

pub const USERNAME_MIN: usize = 2;
pub const USERNAME_MAX: usize = 32;
pub const EMAIL_MAX: usize = 254;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 128;

/// Unique login handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Result<Self, GuardFailure> {
        let value = raw.trim();
        GuardChain::new()
            .check(|| against_empty(value, "username"))
            .check(|| against_too_short(value, USERNAME_MIN, "username"))
            .check(|| against_too_long(value, USERNAME_MAX, "username"))
            .finish()?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Username {}

impl core::fmt::Display for Username {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address, normalized to lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, GuardFailure> {
        let value = raw.trim();
        GuardChain::new()
            .check(|| against_empty(value, "email"))
            .check(|| against_too_long(value, EMAIL_MAX, "email"))
            .check(|| against_invalid_email(value, "email"))
            .finish()?;
        Ok(Self(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account password.
///
/// Hashing is the authentication collaborator's concern; this type only
/// enforces length bounds and keeps the value out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: &str) -> Result<Self, GuardFailure> {
        GuardChain::new()
            .check(|| against_empty(raw, "password"))
            .check(|| against_too_short(raw, PASSWORD_MIN, "password"))
            .check(|| against_too_long(raw, PASSWORD_MAX, "password"))
            .finish()?;
        Ok(Self(raw.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Password {}

impl core::fmt::Debug for Password {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Which side of the marketplace the account acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    Brand,
    Candidate,
}

impl ContextType {
    pub const ALLOWED: [&'static str; 2] = ["brand", "candidate"];

    pub fn parse(raw: &str) -> Result<Self, GuardFailure> {
        is_one_of(raw, &Self::ALLOWED, "contextType")?;
        Ok(match raw {
            "brand" => ContextType::Brand,
            _ => ContextType::Candidate,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextType::Brand => "brand",
            ContextType::Candidate => "candidate",
        }
    }
}

impl ValueObject for ContextType {}

// ─────────────────────────────────────────────────────────────────────────────
// User entity
// ─────────────────────────────────────────────────────────────────────────────

/// Raw input for [`User::create`].
#[derive(Debug, Clone)]
pub struct UserProps {
    pub username: String,
    pub email: String,
    pub password: String,
    pub context_type: String,
    pub role_ids: Vec<RoleId>,
    pub created_at: DateTime<Utc>,
}

/// User account.
///
/// # Invariants
/// - Every field holds a validated value object (construction goes through
///   [`User::create`] only).
/// - Role ids are unique within one user (duplicates are dropped, first wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    password: Password,
    context_type: ContextType,
    role_ids: Vec<RoleId>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Validate `props` and build the entity.
    ///
    /// Runs every guard again even when the caller already validated its DTO.
    pub fn create(id: UserId, props: UserProps) -> Result<Self, GuardFailure> {
        let username = Username::new(&props.username)?;
        let email = Email::new(&props.email)?;
        let password = Password::new(&props.password)?;
        let context_type = ContextType::parse(&props.context_type)?;

        let mut role_ids: Vec<RoleId> = Vec::with_capacity(props.role_ids.len());
        for role_id in props.role_ids {
            if !role_ids.contains(&role_id) {
                role_ids.push(role_id);
            }
        }

        Ok(Self {
            id,
            username,
            email,
            password,
            context_type,
            role_ids,
            created_at: props.created_at,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn context_type(&self) -> ContextType {
        self.context_type
    }

    pub fn role_ids(&self) -> &[RoleId] {
        &self.role_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> UserProps {
        UserProps {
            username: "bob".to_string(),
            email: "Bob@Bob.com".to_string(),
            password: "test123".to_string(),
            context_type: "brand".to_string(),
            role_ids: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_normalizes_email_and_trims_username() {
        let user = User::create(
            UserId::new(),
            UserProps {
                username: "  bob ".to_string(),
                ..props()
            },
        )
        .unwrap();

        assert_eq!(user.username().as_str(), "bob");
        assert_eq!(user.email().as_str(), "bob@bob.com");
        assert_eq!(user.context_type(), ContextType::Brand);
    }

    #[test]
    fn create_rejects_each_invalid_field_with_its_code() {
        let cases = [
            (UserProps { username: String::new(), ..props() }, "username.required"),
            (UserProps { username: "b".to_string(), ..props() }, "username.tooShort"),
            (UserProps { email: "bob".to_string(), ..props() }, "email.invalidFormat"),
            (UserProps { password: "123".to_string(), ..props() }, "password.tooShort"),
            (UserProps { context_type: "admin".to_string(), ..props() }, "contextType.notAllowed"),
        ];

        for (input, code) in cases {
            let err = User::create(UserId::new(), input).unwrap_err();
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn duplicate_role_ids_are_dropped() {
        let role = RoleId::new();
        let other = RoleId::new();
        let user = User::create(
            UserId::new(),
            UserProps {
                role_ids: vec![role, other, role],
                ..props()
            },
        )
        .unwrap();

        assert_eq!(user.role_ids(), &[role, other]);
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let user = User::create(UserId::new(), props()).unwrap();
        let rendered = format!("{user:?}");
        assert!(!rendered.contains("test123"));
        assert!(rendered.contains("Password(***)"));
    }
}
