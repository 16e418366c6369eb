//! `hireboard-core` — building blocks of the use-case pipeline.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! guards, the outcome channel, validation and repository errors, the mapper
//! and use-case contracts, and strongly-typed identifiers.

pub mod entity;
pub mod error;
pub mod guard;
pub mod id;
pub mod mapper;
pub mod outcome;
pub mod use_case;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainFailure, RepositoryError, RepositoryResultExt, ValidationError};
pub use guard::{GuardChain, GuardFailure, GuardResult, Violation};
pub use id::{OfferId, RoleId, UserId};
pub use mapper::Mapper;
pub use outcome::{Outcome, UseCaseResult, fail, ok};
pub use use_case::UseCase;
pub use value_object::ValueObject;
