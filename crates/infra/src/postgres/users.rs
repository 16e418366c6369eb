use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use hireboard_core::{Entity, Mapper, RepositoryError, RoleId, UserId};
use hireboard_users::{
    Email, Role, RoleMapper, RoleName, RoleRecord, RoleRepository, User, UserMapper, UserRecord,
    UserRepository, Username,
};

use super::map_sqlx_error;

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

const USER_COLUMNS: &str =
    "user_id, username, email, password, context_type, role_ids, created_at";

fn user_record(row: &PgRow) -> Result<UserRecord, sqlx::Error> {
    Ok(UserRecord {
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        context_type: row.try_get("context_type")?,
        role_ids: row.try_get("role_ids")?,
        created_at: row.try_get("created_at")?,
    })
}

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_user(operation: &'static str, row: Option<PgRow>) -> Result<User, RepositoryError> {
    let row = row.ok_or_else(|| RepositoryError::not_found("user"))?;
    let record = user_record(&row).map_err(|e| map_sqlx_error(operation, e))?;
    UserMapper::to_domain(record)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self), err)]
    async fn exists(&self, email: &Email) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("user_exists", e))?;
        row.try_get::<bool, _>(0)
            .map_err(|e| map_sqlx_error("user_exists", e))
    }

    #[instrument(skip(self), err)]
    async fn get_user_by_username(&self, username: &Username) -> Result<User, RepositoryError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1"))
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_user_by_username", e))?;
        decode_user("get_user_by_username", row)
    }

    #[instrument(skip(self), err)]
    async fn get_user_by_user_id(&self, user_id: &UserId) -> Result<User, RepositoryError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"))
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_user_by_user_id", e))?;
        decode_user("get_user_by_user_id", row)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()), err)]
    async fn persist(&self, user: &User) -> Result<(), RepositoryError> {
        let record = UserMapper::to_persistence(user);
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_id, username, email, password, context_type, role_ids, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(record.user_id)
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.context_type)
        .bind(&record.role_ids)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("persist_user", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!("user already stored; persist skipped");
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Roles
// ─────────────────────────────────────────────────────────────────────────────

fn role_record(row: &PgRow) -> Result<RoleRecord, sqlx::Error> {
    Ok(RoleRecord {
        role_id: row.try_get("role_id")?,
        name: row.try_get("name")?,
        permissions: row.try_get("permissions")?,
        created_at: row.try_get("created_at")?,
    })
}

#[derive(Debug, Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self), err)]
    async fn exists(&self, name: &RoleName) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM roles WHERE name = $1)")
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("role_exists", e))?;
        row.try_get::<bool, _>(0)
            .map_err(|e| map_sqlx_error("role_exists", e))
    }

    #[instrument(skip(self), err)]
    async fn get_role_by_id(&self, role_id: &RoleId) -> Result<Role, RepositoryError> {
        let row = sqlx::query(
            "SELECT role_id, name, permissions, created_at FROM roles WHERE role_id = $1",
        )
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_role_by_id", e))?
        .ok_or_else(|| RepositoryError::not_found("role"))?;

        let record = role_record(&row).map_err(|e| map_sqlx_error("get_role_by_id", e))?;
        RoleMapper::to_domain(record)
    }

    #[instrument(skip(self, role), fields(role_id = %role.id()), err)]
    async fn persist(&self, role: &Role) -> Result<(), RepositoryError> {
        let record = RoleMapper::to_persistence(role);
        let result = sqlx::query(
            r#"
            INSERT INTO roles (role_id, name, permissions, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(record.role_id)
        .bind(&record.name)
        .bind(&record.permissions)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("persist_role", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!("role name already stored; persist skipped");
        }
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, role_id: &RoleId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM roles WHERE role_id = $1")
            .bind(role_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_role", e))?;
        Ok(())
    }
}
