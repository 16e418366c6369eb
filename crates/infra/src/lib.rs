//! Infrastructure layer: record stores and repository adapters.
//!
//! - [`memory`]: in-memory repositories over a [`RecordStore`], used by tests
//!   and by the API when no database is configured.
//! - [`postgres`]: sqlx-backed repositories plus pool and schema helpers.

pub mod memory;
pub mod postgres;
pub mod record_store;

pub use memory::{InMemoryOfferRepository, InMemoryRoleRepository, InMemoryUserRepository};
pub use postgres::{PgOfferRepository, PgRoleRepository, PgUserRepository};
pub use record_store::{InMemoryRecordStore, RecordStore};
