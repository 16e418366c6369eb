//! Mapper contract: persisted record shape <-> domain entity.

use crate::error::RepositoryError;

/// Pure, bidirectional conversion between a storage record and an entity.
///
/// - `to_persistence` is total.
/// - `to_domain` must succeed for every record produced by `to_persistence`.
///   A record that fails to map is corrupt storage, reported as
///   [`RepositoryError::Malformed`] (environmental, never a domain error).
pub trait Mapper {
    type Domain;
    type Record;

    fn to_domain(record: Self::Record) -> Result<Self::Domain, RepositoryError>;

    fn to_persistence(domain: &Self::Domain) -> Self::Record;
}
