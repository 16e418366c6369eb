//! Error model shared by every feature.
//!
//! Three channels, kept apart on purpose:
//! - [`ValidationError`]: malformed input caught by guards before any side effect.
//! - Per-use-case domain errors: closed `thiserror` enums living next to each
//!   use case; they implement [`DomainFailure`] to expose a stable code.
//! - [`RepositoryError`]: environmental failures raised by storage adapters.
//!   These never enter an `Outcome`; use cases propagate them with `?`.

use std::borrow::Cow;

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::guard::GuardFailure;

/// Stable, client-facing view of a business failure.
///
/// Implemented by every per-use-case error enum. Transport adapters use the
/// code and message; they choose the response category with their own
/// exhaustive match over the concrete enum.
pub trait DomainFailure: core::fmt::Debug + core::fmt::Display + Send + Sync {
    /// Machine-readable code (`<subject>.<violationKind>` or a variant name
    /// such as `EmailAlreadyExistsError`).
    fn code(&self) -> Cow<'_, str>;

    /// Human-readable message.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Optional structured payload (e.g. the conflicting field).
    fn payload(&self) -> Option<JsonValue> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Malformed or missing input, always client-caused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    code: String,
    message: String,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<GuardFailure> for ValidationError {
    fn from(failure: GuardFailure) -> Self {
        Self::new(failure.code(), failure.message())
    }
}

impl DomainFailure for ValidationError {
    fn code(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.code)
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Failure reported by a repository adapter.
///
/// `NotFound` is the only recoverable variant: use cases either fold it into
/// absence (see [`RepositoryResultExt::optional`]) or map it to a declared
/// domain error. Everything else is environmental.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A stored record could not be mapped back to its entity.
    #[error("malformed {entity} record: {reason}")]
    Malformed { entity: &'static str, reason: String },

    /// Storage backend failure (connection, query, serialization).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn malformed(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            entity,
            reason: reason.into(),
        }
    }

    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Port-boundary helpers for repository reads.
pub trait RepositoryResultExt<T> {
    /// Fold a not-found signal into `Ok(None)`; other failures pass through.
    fn optional(self) -> Result<Option<T>, RepositoryError>;
}

impl<T> RepositoryResultExt<T> for Result<T, RepositoryError> {
    fn optional(self) -> Result<Option<T>, RepositoryError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
