//! Use-case contract.

use async_trait::async_trait;

use crate::error::DomainFailure;
use crate::outcome::UseCaseResult;

/// One orchestrated business operation: DTO in, [`UseCaseResult`] out.
///
/// Implementations follow the same sequence every time:
///
/// ```text
/// guard DTO -> precondition reads -> entity factory -> persist -> Ok(payload)
/// ```
///
/// Every expected failure is returned as `Ok(Err(Self::Error))`; `Self::Error`
/// is the closed list of failures this use case can produce. The outer `Err`
/// is reserved for environmental failures.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Request: Send + 'static;
    type Response: Send + 'static;
    type Error: DomainFailure + 'static;

    async fn execute(&self, request: Self::Request) -> UseCaseResult<Self::Response, Self::Error>;
}
