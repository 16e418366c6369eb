//! Guards: pure input-validation checks.
//!
//! A guard inspects one value and returns `Ok(())` or a [`GuardFailure`]
//! naming the subject and the [`Violation`]. Failures render to a stable
//! machine code of the form `<subject>.<violationKind>` (e.g.
//! `email.invalidFormat`), which is part of the public API contract.
//!
//! Guards are combined fail-fast: [`all_of`] and [`GuardChain`] stop at the
//! first failure and never evaluate the remaining checks.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Result of a single guard (or a combination of guards).
pub type GuardResult = Result<(), GuardFailure>;

/// Closed set of violation kinds recognised across features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Violation {
    /// Value is absent or blank.
    Required,
    /// Value is shorter than `min` characters.
    TooShort { min: usize },
    /// Value is longer than `max` characters.
    TooLong { max: usize },
    /// Numeric value lies outside `min..=max`.
    OutOfRange { min: i64, max: i64 },
    /// Value does not have the expected shape.
    InvalidFormat,
    /// Value is not a member of the allowed set.
    NotAllowed { value: String },
}

impl Violation {
    /// Stable camelCase kind used as the second segment of the machine code.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::TooShort { .. } => "tooShort",
            Violation::TooLong { .. } => "tooLong",
            Violation::OutOfRange { .. } => "outOfRange",
            Violation::InvalidFormat => "invalidFormat",
            Violation::NotAllowed { .. } => "notAllowed",
        }
    }
}

/// Structured reason a guard rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardFailure {
    subject: Cow<'static, str>,
    violation: Violation,
}

impl GuardFailure {
    pub fn new(subject: impl Into<Cow<'static, str>>, violation: Violation) -> Self {
        Self {
            subject: subject.into(),
            violation,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    /// Machine code `<subject>.<violationKind>`.
    pub fn code(&self) -> String {
        format!("{}.{}", self.subject, self.violation.kind())
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> String {
        let subject = &self.subject;
        match &self.violation {
            Violation::Required => format!("{subject} is required"),
            Violation::TooShort { min } => {
                format!("{subject} must be at least {min} characters")
            }
            Violation::TooLong { max } => format!("{subject} must be at most {max} characters"),
            Violation::OutOfRange { min, max } => {
                format!("{subject} must be between {min} and {max}")
            }
            Violation::InvalidFormat => format!("{subject} has an invalid format"),
            Violation::NotAllowed { value } => format!("'{value}' is not an allowed {subject}"),
        }
    }
}

impl core::fmt::Display for GuardFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.code())
    }
}

impl std::error::Error for GuardFailure {}

// ─────────────────────────────────────────────────────────────────────────────
// Individual guards
// ─────────────────────────────────────────────────────────────────────────────

/// Reject blank strings (whitespace only counts as blank).
pub fn against_empty(value: &str, subject: &'static str) -> GuardResult {
    if value.trim().is_empty() {
        return Err(GuardFailure::new(subject, Violation::Required));
    }
    Ok(())
}

/// Reject absent optional values.
pub fn against_missing<T>(value: Option<&T>, subject: &'static str) -> GuardResult
where
    T: ?Sized,
{
    match value {
        Some(_) => Ok(()),
        None => Err(GuardFailure::new(subject, Violation::Required)),
    }
}

/// Reject every blank entry, reporting the first one in order.
pub fn against_empty_bulk<'a, I>(fields: I) -> GuardResult
where
    I: IntoIterator<Item = (&'a str, &'static str)>,
{
    all_of(
        fields
            .into_iter()
            .map(|(value, subject)| against_empty(value, subject)),
    )
}

/// Reject strings shorter than `min` characters.
pub fn against_too_short(value: &str, min: usize, subject: &'static str) -> GuardResult {
    if value.chars().count() < min {
        return Err(GuardFailure::new(subject, Violation::TooShort { min }));
    }
    Ok(())
}

/// Reject strings longer than `max` characters.
pub fn against_too_long(value: &str, max: usize, subject: &'static str) -> GuardResult {
    if value.chars().count() > max {
        return Err(GuardFailure::new(subject, Violation::TooLong { max }));
    }
    Ok(())
}

/// Require `min <= value <= max`.
pub fn in_range(value: i64, min: i64, max: i64, subject: &'static str) -> GuardResult {
    if value < min || value > max {
        return Err(GuardFailure::new(subject, Violation::OutOfRange { min, max }));
    }
    Ok(())
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local@domain.tld; no whitespace, exactly one '@', dotted domain.
        let pattern = r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Reject values that are not shaped like an email address.
pub fn against_invalid_email(value: &str, subject: &'static str) -> GuardResult {
    if !email_regex().is_match(value) {
        return Err(GuardFailure::new(subject, Violation::InvalidFormat));
    }
    Ok(())
}

/// Require `value` to be one of `allowed`.
pub fn is_one_of<S>(value: &str, allowed: &[S], subject: &'static str) -> GuardResult
where
    S: AsRef<str>,
{
    if allowed.iter().any(|candidate| candidate.as_ref() == value) {
        return Ok(());
    }
    Err(GuardFailure::new(
        subject,
        Violation::NotAllowed {
            value: value.to_string(),
        },
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Combinators
// ─────────────────────────────────────────────────────────────────────────────

/// Return the first failing result, or `Ok(())` when all succeed.
///
/// Iterators are lazy, so checks produced by an adapter such as `map` after
/// the first failure are never evaluated.
pub fn all_of<I>(results: I) -> GuardResult
where
    I: IntoIterator<Item = GuardResult>,
{
    for result in results {
        result?;
    }
    Ok(())
}

/// Builder for ordered, heterogeneous guard checks (fail-fast).
///
/// ```
/// use hireboard_core::guard::{against_empty, against_too_long, GuardChain};
///
/// let result = GuardChain::new()
///     .check(|| against_empty("", "username"))
///     .check(|| against_too_long("bob", 32, "username"))
///     .finish();
///
/// assert_eq!(result.unwrap_err().code(), "username.required");
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct GuardChain {
    failure: Option<GuardFailure>,
}

impl GuardChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `check` unless an earlier check already failed.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: FnOnce() -> GuardResult,
    {
        if self.failure.is_none() {
            if let Err(failure) = check() {
                self.failure = Some(failure);
            }
        }
        self
    }

    pub fn finish(self) -> GuardResult {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}
