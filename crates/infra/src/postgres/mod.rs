//! Postgres repository adapters.
//!
//! Queries are built at runtime (no compile-time checked macros), so the crate
//! builds without a database. Missing rows surface as
//! [`RepositoryError::NotFound`]; every other sqlx failure is an environmental
//! [`RepositoryError::Backend`].

pub mod offers;
pub mod users;

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use hireboard_core::RepositoryError;

pub use offers::PgOfferRepository;
pub use users::{PgRoleRepository, PgUserRepository};

const SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

/// Open a connection pool.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")
}

/// Apply the schema. Every statement is idempotent.
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .context("failed to apply schema")?;
    tracing::info!("database schema is up to date");
    Ok(())
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> RepositoryError {
    RepositoryError::backend(anyhow::Error::new(err).context(format!("sqlx error in {operation}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_every_table() {
        for table in ["users", "roles", "offers"] {
            assert!(SCHEMA.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")));
        }
    }

    #[test]
    fn sqlx_failures_are_backend_errors() {
        let err = map_sqlx_error("persist_user", sqlx::Error::PoolClosed);
        assert!(matches!(err, RepositoryError::Backend(_)));
        assert!(err.to_string().contains("persist_user"));
        let RepositoryError::Backend(source) = err else {
            unreachable!()
        };
        assert!(source.downcast_ref::<sqlx::Error>().is_some());
    }
}
