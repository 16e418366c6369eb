//! Outcome: the business-failure channel of every use case.
//!
//! An [`Outcome`] is a plain `Result`: `Ok(value)` or `Err(error)`, never both
//! and never neither. The success value can only be reached through a match
//! (or `?`), so reading the wrong variant is rejected at compile time.
//!
//! Use cases return [`UseCaseResult`], which nests the outcome inside
//! `anyhow::Result`. The two layers are deliberately distinct:
//!
//! ```text
//! Err(anyhow::Error)   unexpected / environmental (store down, corrupt record)
//! Ok(Err(E))           expected business failure (validation, conflict, not found)
//! Ok(Ok(T))            success
//! ```
//!
//! Environmental failures travel with `?`; business failures travel with
//! [`try_outcome!`](crate::try_outcome), which flat-maps over the success
//! channel and returns the first failure unchanged.

/// Two-variant success/failure container returned by business operations.
pub type Outcome<T, E> = Result<T, E>;

/// Result of executing a use case (see module docs for the layering).
pub type UseCaseResult<T, E> = anyhow::Result<Outcome<T, E>>;

/// Construct a successful outcome.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Ok(value)
}

/// Construct a failed outcome.
pub fn fail<T, E>(error: E) -> Outcome<T, E> {
    Err(error)
}

/// Unwrap the success channel of an [`Outcome`] inside a function returning
/// [`UseCaseResult`], or return the failure as `Ok(Err(..))`.
///
/// The error is converted with `From`, so a `GuardFailure` can short-circuit a
/// use case whose error enum has a `Validation` variant.
///
/// ```
/// use hireboard_core::{try_outcome, UseCaseResult};
///
/// fn half(n: u32) -> Result<u32, String> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
/// }
///
/// fn quarter(n: u32) -> UseCaseResult<u32, String> {
///     let h = try_outcome!(half(n));
///     Ok(half(h))
/// }
///
/// assert_eq!(quarter(8).unwrap(), Ok(2));
/// assert_eq!(quarter(6).unwrap(), Err("3 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr) => {
        match $expr {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return ::core::result::Result::Ok(::core::result::Result::Err(
                    ::core::convert::From::from(error),
                ));
            }
        }
    };
}
