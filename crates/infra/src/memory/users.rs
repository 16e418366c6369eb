use async_trait::async_trait;
use uuid::Uuid;

use hireboard_core::{Entity, Mapper, RepositoryError, RoleId, UserId};
use hireboard_users::{
    Email, Role, RoleMapper, RoleName, RoleRecord, RoleRepository, User, UserMapper, UserRecord,
    UserRepository, Username,
};

use crate::record_store::{InMemoryRecordStore, RecordStore};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryUserRepository<S = InMemoryRecordStore<Uuid, UserRecord>> {
    records: S,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::new())
    }
}

impl<S> InMemoryUserRepository<S> {
    pub fn with_store(records: S) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<S> UserRepository for InMemoryUserRepository<S>
where
    S: RecordStore<Uuid, UserRecord>,
{
    async fn exists(&self, email: &Email) -> Result<bool, RepositoryError> {
        let email = email.as_str();
        Ok(self
            .records
            .find(&|r: &UserRecord| r.email == email)
            .is_some())
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, RepositoryError> {
        let username = username.as_str();
        let record = self
            .records
            .find(&|r: &UserRecord| r.username == username)
            .ok_or_else(|| RepositoryError::not_found("user"))?;
        UserMapper::to_domain(record)
    }

    async fn get_user_by_user_id(&self, user_id: &UserId) -> Result<User, RepositoryError> {
        let record = self
            .records
            .get(user_id.as_uuid())
            .ok_or_else(|| RepositoryError::not_found("user"))?;
        UserMapper::to_domain(record)
    }

    async fn persist(&self, user: &User) -> Result<(), RepositoryError> {
        let record = UserMapper::to_persistence(user);
        let email = record.email.clone();
        let username = record.username.clone();

        // Email and username are both unique, matching the Postgres schema.
        let inserted = self.records.insert_unless(record.user_id, record, &|r: &UserRecord| {
            r.email == email || r.username == username
        });
        if !inserted {
            tracing::debug!(user_id = %user.id(), "email or username already stored; persist skipped");
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Roles
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryRoleRepository<S = InMemoryRecordStore<Uuid, RoleRecord>> {
    records: S,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::new())
    }
}

impl<S> InMemoryRoleRepository<S> {
    pub fn with_store(records: S) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<S> RoleRepository for InMemoryRoleRepository<S>
where
    S: RecordStore<Uuid, RoleRecord>,
{
    async fn exists(&self, name: &RoleName) -> Result<bool, RepositoryError> {
        let name = name.as_str();
        Ok(self
            .records
            .find(&|r: &RoleRecord| r.name == name)
            .is_some())
    }

    async fn get_role_by_id(&self, role_id: &RoleId) -> Result<Role, RepositoryError> {
        let record = self
            .records
            .get(role_id.as_uuid())
            .ok_or_else(|| RepositoryError::not_found("role"))?;
        RoleMapper::to_domain(record)
    }

    async fn persist(&self, role: &Role) -> Result<(), RepositoryError> {
        let record = RoleMapper::to_persistence(role);
        let name = record.name.clone();

        if !self
            .records
            .insert_unless(record.role_id, record, &|r: &RoleRecord| r.name == name)
        {
            tracing::debug!(role_id = %role.id(), "role name already stored; persist skipped");
        }
        Ok(())
    }

    async fn delete(&self, role_id: &RoleId) -> Result<(), RepositoryError> {
        self.records.remove(role_id.as_uuid());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hireboard_core::RepositoryResultExt;
    use hireboard_users::{RoleProps, UserProps};

    fn user(username: &str, email: &str) -> User {
        User::create(
            UserId::new(),
            UserProps {
                username: username.to_string(),
                email: email.to_string(),
                password: "secret1".to_string(),
                context_type: "brand".to_string(),
                role_ids: vec![RoleId::new()],
                created_at: Utc::now(),
            },
        )
        .unwrap()
    }

    fn role(name: &str) -> Role {
        Role::create(
            RoleId::new(),
            RoleProps {
                name: name.to_string(),
                permissions: vec!["*".to_string()],
                created_at: Utc::now(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn persisted_user_is_found_by_every_key() {
        let repo = InMemoryUserRepository::new();
        let alice = user("alice", "alice@example.com");

        repo.persist(&alice).await.unwrap();

        let email = Email::new("ALICE@example.com").unwrap();
        assert!(repo.exists(&email).await.unwrap());
        assert_eq!(repo.get_user_by_user_id(alice.id()).await.unwrap(), alice);
        assert_eq!(
            repo.get_user_by_username(alice.username()).await.unwrap(),
            alice
        );
    }

    #[tokio::test]
    async fn second_user_with_same_email_is_silently_dropped() {
        let repo = InMemoryUserRepository::new();
        let first = user("alice", "shared@example.com");
        let second = user("alicia", "shared@example.com");

        repo.persist(&first).await.unwrap();
        repo.persist(&second).await.unwrap();

        assert!(
            repo.get_user_by_user_id(second.id())
                .await
                .optional()
                .unwrap()
                .is_none()
        );
        assert_eq!(repo.get_user_by_user_id(first.id()).await.unwrap(), first);
    }

    #[tokio::test]
    async fn second_user_with_same_username_is_silently_dropped() {
        let repo = InMemoryUserRepository::new();
        let first = user("bob", "a@example.com");
        let second = user("bob", "b@example.com");

        repo.persist(&first).await.unwrap();
        repo.persist(&second).await.unwrap();

        assert!(
            repo.get_user_by_user_id(second.id())
                .await
                .optional()
                .unwrap()
                .is_none()
        );
        let email = Email::new("b@example.com").unwrap();
        assert!(!repo.exists(&email).await.unwrap());
        assert_eq!(repo.get_user_by_username(first.username()).await.unwrap(), first);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let err = repo.get_user_by_user_id(&UserId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn malformed_record_is_reported_not_hidden() {
        let store = InMemoryRecordStore::<Uuid, UserRecord>::new();
        let id = Uuid::now_v7();
        store.upsert(
            id,
            UserRecord {
                user_id: id,
                username: "x".to_string(),
                email: "x@example.com".to_string(),
                password: "secret1".to_string(),
                context_type: "brand".to_string(),
                role_ids: vec![],
                created_at: Utc::now(),
            },
        );
        let repo = InMemoryUserRepository::with_store(store);

        let err = repo
            .get_user_by_user_id(&UserId::from_uuid(id))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Malformed { entity: "user", .. }));
    }

    #[tokio::test]
    async fn roles_are_unique_by_name_and_deletable() {
        let repo = InMemoryRoleRepository::new();
        let admin = role("admin");
        let clone = role("admin");

        repo.persist(&admin).await.unwrap();
        repo.persist(&clone).await.unwrap();

        assert!(repo.exists(admin.name()).await.unwrap());
        assert!(repo.get_role_by_id(clone.id()).await.unwrap_err().is_not_found());

        repo.delete(admin.id()).await.unwrap();
        repo.delete(admin.id()).await.unwrap();
        assert!(!repo.exists(admin.name()).await.unwrap());
    }
}
