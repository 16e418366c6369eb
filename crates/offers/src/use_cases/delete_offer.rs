//! DeleteOffer: withdraw an offer.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;

use hireboard_core::guard::GuardFailure;
use hireboard_core::{
    DomainFailure, OfferId, UseCase, UseCaseResult, ValidationError, fail, ok, try_outcome,
};

use crate::ports::OfferRepository;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteOfferDto {
    pub offer_id: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeleteOfferError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("offer {offer_id} not found")]
    OfferNotFound { offer_id: String },
}

impl From<GuardFailure> for DeleteOfferError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl DomainFailure for DeleteOfferError {
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

pub struct DeleteOffer {
    offers: Arc<dyn OfferRepository>,
}

impl DeleteOffer {
    pub fn new(offers: Arc<dyn OfferRepository>) -> Self {
        Self { offers }
    }
}

#[async_trait]
impl UseCase for DeleteOffer {
    type Request = DeleteOfferDto;
    type Response = ();
    type Error = DeleteOfferError;

    async fn execute(&self, dto: DeleteOfferDto) -> UseCaseResult<(), DeleteOfferError> {
        let offer_id = try_outcome!(OfferId::parse(&dto.offer_id));

        if !self.offers.exists(&offer_id).await? {
            return Ok(fail(DeleteOfferError::OfferNotFound {
                offer_id: offer_id.to_string(),
            }));
        }

        self.offers.delete(&offer_id).await?;

        Ok(ok(()))
    }
}
