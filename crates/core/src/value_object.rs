//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this crate
/// family they are also the unit of validation: each one is constructed through
/// a fallible factory that runs its guards, so holding a value object proves
/// the input was valid.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Email(String);
///
/// impl ValueObject for Email {}
///
/// let a = Email::new("bob@bob.com")?;
/// let b = Email::new("BOB@bob.com")?;
/// assert_eq!(a, b); // equal by value (normalized), not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
