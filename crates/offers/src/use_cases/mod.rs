//! Offer use cases.
//!
//! | use case | failures |
//! |---|---|
//! | [`CreateOffer`] | `Validation` |
//! | [`GetOffer`] | `Validation`, `OfferNotFound` |
//! | [`DeleteOffer`] | `Validation`, `OfferNotFound` |

pub mod create_offer;
pub mod delete_offer;
pub mod get_offer;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_offer::{CreateOffer, CreateOfferDto, CreateOfferError};
pub use delete_offer::{DeleteOffer, DeleteOfferDto, DeleteOfferError};
pub use get_offer::{GetOffer, GetOfferDto, GetOfferError};
