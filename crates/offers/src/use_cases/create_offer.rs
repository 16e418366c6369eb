//! CreateOffer: publish a job offer.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use hireboard_core::guard::{GuardChain, GuardFailure, against_empty_bulk, against_missing};
use hireboard_core::{DomainFailure, OfferId, UseCase, UseCaseResult, ValidationError, ok, try_outcome};

use crate::offer::{Offer, OfferError, OfferProps};
use crate::ports::OfferRepository;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOfferDto {
    pub title: String,
    pub description: String,
    pub technology: String,
    pub employment_type: String,
    pub level: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateOfferError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<GuardFailure> for CreateOfferError {
    fn from(failure: GuardFailure) -> Self {
        Self::Validation(failure.into())
    }
}

impl From<OfferError> for CreateOfferError {
    fn from(err: OfferError) -> Self {
        Self::Validation(err.into())
    }
}

impl DomainFailure for CreateOfferError {
    fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Validation(err) => Cow::Borrowed(err.code()),
        }
    }
}

pub struct CreateOffer {
    offers: Arc<dyn OfferRepository>,
}

impl CreateOffer {
    pub fn new(offers: Arc<dyn OfferRepository>) -> Self {
        Self { offers }
    }
}

#[async_trait]
impl UseCase for CreateOffer {
    type Request = CreateOfferDto;
    type Response = Offer;
    type Error = CreateOfferError;

    async fn execute(&self, dto: CreateOfferDto) -> UseCaseResult<Offer, CreateOfferError> {
        try_outcome!(
            GuardChain::new()
                .check(|| against_empty_bulk([
                    (dto.title.as_str(), "title"),
                    (dto.description.as_str(), "description"),
                    (dto.technology.as_str(), "technology"),
                    (dto.employment_type.as_str(), "employmentType"),
                    (dto.level.as_str(), "level"),
                ]))
                .check(|| against_missing(dto.salary_min.as_ref(), "salaryMin"))
                .check(|| against_missing(dto.salary_max.as_ref(), "salaryMax"))
                .finish()
        );

        let offer = try_outcome!(Offer::create(
            OfferId::new(),
            OfferProps {
                title: dto.title,
                description: dto.description,
                technology: dto.technology,
                employment_type: dto.employment_type,
                level: dto.level,
                salary_min: dto.salary_min.unwrap_or_default(),
                salary_max: dto.salary_max.unwrap_or_default(),
                created_at: Utc::now(),
            },
        ));

        self.offers.persist(&offer).await?;

        Ok(ok(offer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::Technology;
    use crate::use_cases::test_support::RecordingOfferRepository;

    fn dto() -> CreateOfferDto {
        CreateOfferDto {
            title: "Platform engineer".to_string(),
            description: "Kubernetes and Rust.".to_string(),
            technology: "rust".to_string(),
            employment_type: "contract".to_string(),
            level: "lead".to_string(),
            salary_min: Some(25_000),
            salary_max: Some(35_000),
        }
    }

    #[tokio::test]
    async fn missing_salary_is_required() {
        let repo = Arc::new(RecordingOfferRepository::default());

        let err = CreateOffer::new(repo.clone())
            .execute(CreateOfferDto {
                salary_max: None,
                ..dto()
            })
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "salaryMax.required");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn unsupported_technology_reports_value_first_code() {
        let repo = Arc::new(RecordingOfferRepository::default());

        let err = CreateOffer::new(repo.clone())
            .execute(CreateOfferDto {
                technology: "cobol".to_string(),
                ..dto()
            })
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.code(), "cobol.invalidTechnologyType");
        assert!(repo.persisted().is_empty());
    }

    #[tokio::test]
    async fn offer_is_persisted_and_returned() {
        let repo = Arc::new(RecordingOfferRepository::default());

        let offer = CreateOffer::new(repo.clone())
            .execute(dto())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(offer.technology(), Technology::Rust);
        assert_eq!(offer.salary_max(), 35_000);
        assert_eq!(repo.persisted(), vec![offer]);
    }

    #[tokio::test]
    async fn storage_outage_stays_on_the_outer_channel() {
        let repo = Arc::new(RecordingOfferRepository {
            unavailable: true,
            ..Default::default()
        });

        assert!(CreateOffer::new(repo).execute(dto()).await.is_err());
    }
}
