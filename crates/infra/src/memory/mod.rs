//! In-memory repository adapters.
//!
//! They keep persistence records, not entities, and go through the mappers on
//! every read and write, exactly like the Postgres adapters do.

pub mod offers;
pub mod users;

pub use offers::InMemoryOfferRepository;
pub use users::{InMemoryRoleRepository, InMemoryUserRepository};
