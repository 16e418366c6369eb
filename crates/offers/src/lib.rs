//! `hireboard-offers` — job offers.
//!
//! The [`Offer`] entity with its closed vocabularies (technology, employment
//! type, seniority), the offer mapper and repository port, and the offer use
//! cases.

pub mod mappers;
pub mod offer;
pub mod ports;
pub mod use_cases;

pub use mappers::{OfferMapper, OfferRecord};
pub use offer::{
    EmploymentType, Offer, OfferError, OfferProps, SeniorityLevel, Technology,
};
pub use ports::OfferRepository;
pub use use_cases::{
    CreateOffer, CreateOfferDto, CreateOfferError, DeleteOffer, DeleteOfferDto, DeleteOfferError,
    GetOffer, GetOfferDto, GetOfferError,
};
