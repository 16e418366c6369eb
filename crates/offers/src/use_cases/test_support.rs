//! Recording repository stub for offer use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use hireboard_core::{OfferId, RepositoryError};

use crate::offer::{Offer, OfferProps};
use crate::ports::OfferRepository;

pub(crate) fn sample_offer() -> Offer {
    Offer::create(
        OfferId::new(),
        OfferProps {
            title: "Rust developer".to_string(),
            description: "Own the payments service.".to_string(),
            technology: "rust".to_string(),
            employment_type: "permanent".to_string(),
            level: "mid".to_string(),
            salary_min: 10_000,
            salary_max: 15_000,
            created_at: Utc::now(),
        },
    )
    .unwrap()
}

#[derive(Default)]
pub(crate) struct RecordingOfferRepository {
    pub stored: Option<Offer>,
    pub unavailable: bool,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) persisted: Mutex<Vec<Offer>>,
    pub(crate) deleted: Mutex<Vec<OfferId>>,
}

impl RecordingOfferRepository {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn persisted(&self) -> Vec<Offer> {
        self.persisted.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<OfferId> {
        self.deleted.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), RepositoryError> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable {
            return Err(RepositoryError::backend(anyhow::anyhow!("connection reset")));
        }
        Ok(())
    }
}

#[async_trait]
impl OfferRepository for RecordingOfferRepository {
    async fn exists(&self, _offer_id: &OfferId) -> Result<bool, RepositoryError> {
        self.record("exists")?;
        Ok(self.stored.is_some())
    }

    async fn get_offer_by_id(&self, _offer_id: &OfferId) -> Result<Offer, RepositoryError> {
        self.record("get_offer_by_id")?;
        self.stored
            .clone()
            .ok_or_else(|| RepositoryError::not_found("offer"))
    }

    async fn persist(&self, offer: &Offer) -> Result<(), RepositoryError> {
        self.record("persist")?;
        self.persisted.lock().unwrap().push(offer.clone());
        Ok(())
    }

    async fn delete(&self, offer_id: &OfferId) -> Result<(), RepositoryError> {
        self.record("delete")?;
        self.deleted.lock().unwrap().push(*offer_id);
        Ok(())
    }
}
