//! GetOffer: load one offer by id.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use hireboard_core::guard::GuardFailure;
use hireboard_core::{
    DomainFailure, OfferId, RepositoryResultExt, UseCase, UseCaseResult, ValidationError, fail, ok,
    try_outcome,
};

use crate::offer::Offer;
use crate::ports::OfferRepository;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetOfferDto {
    pub offer_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetOfferError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("offer {offer_id} not found")]
    OfferNotFound { offer_id: String },
}

impl From<GuardFailure> for GetOfferError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl DomainFailure for GetOfferError {
    fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Validation(err) => Cow::Borrowed(err.code()),
            Self::OfferNotFound { .. } => Cow::Borrowed("OfferNotFoundError"),
        }
    }

    fn payload(&self) -> Option<JsonValue> {
        match self {
            Self::Validation(_) => None,
            Self::OfferNotFound { offer_id } => Some(json!({ "offerId": offer_id })),
        }
    }
}

pub struct GetOffer {
    offers: Arc<dyn OfferRepository>,
}

impl GetOffer {
    pub fn new(offers: Arc<dyn OfferRepository>) -> Self {
        Self { offers }
    }
}

#[async_trait]
impl UseCase for GetOffer {
    type Request = GetOfferDto;
    type Response = Offer;
    type Error = GetOfferError;

    async fn execute(&self, dto: GetOfferDto) -> UseCaseResult<Offer, GetOfferError> {
        let offer_id = try_outcome!(OfferId::parse(&dto.offer_id));

        match self.offers.get_offer_by_id(&offer_id).await.optional()? {
            Some(offer) => Ok(ok(offer)),
            None => Ok(fail(GetOfferError::OfferNotFound {
                offer_id: offer_id.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingOfferRepository, sample_offer};
    use hireboard_core::Entity;

    #[tokio::test]
    async fn unknown_offer_is_not_found() {
        let repo = Arc::new(RecordingOfferRepository::default());
        let id = OfferId::new();

        let err = GetOffer::new(repo)
            .execute(GetOfferDto {
                offer_id: id.to_string(),
            })
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "OfferNotFoundError");
        assert_eq!(err.payload(), Some(json!({ "offerId": id.to_string() })));
    }

    #[tokio::test]
    async fn stored_offer_is_returned() {
        let offer = sample_offer();
        let repo = Arc::new(RecordingOfferRepository {
            stored: Some(offer.clone()),
            ..Default::default()
        });

        let found = GetOffer::new(repo)
            .execute(GetOfferDto {
                offer_id: offer.id().to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found, offer);
    }

    #[tokio::test]
    async fn garbage_id_never_reaches_storage() {
        let repo = Arc::new(RecordingOfferRepository::default());

        let err = GetOffer::new(repo.clone())
            .execute(GetOfferDto {
                offer_id: "42".to_string(),
            })
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "offerId.invalidFormat");
        assert!(repo.calls().is_empty());
    }
}
