//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are built through validating factories only; no entity knows
/// about storage or transport.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
