use async_trait::async_trait;
use uuid::Uuid;

use hireboard_core::{Mapper, OfferId, RepositoryError};
use hireboard_offers::{Offer, OfferMapper, OfferRecord, OfferRepository};

use crate::record_store::{InMemoryRecordStore, RecordStore};

#[derive(Debug, Default)]
pub struct InMemoryOfferRepository<S = InMemoryRecordStore<Uuid, OfferRecord>> {
    records: S,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::with_store(InMemoryRecordStore::new())
    }
}

impl<S> InMemoryOfferRepository<S> {
    pub fn with_store(records: S) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<S> OfferRepository for InMemoryOfferRepository<S>
where
    S: RecordStore<Uuid, OfferRecord>,
{
    async fn exists(&self, offer_id: &OfferId) -> Result<bool, RepositoryError> {
        Ok(self.records.get(offer_id.as_uuid()).is_some())
    }

    async fn get_offer_by_id(&self, offer_id: &OfferId) -> Result<Offer, RepositoryError> {
        let record = self
            .records
            .get(offer_id.as_uuid())
            .ok_or_else(|| RepositoryError::not_found("offer"))?;
        OfferMapper::to_domain(record)
    }

    async fn persist(&self, offer: &Offer) -> Result<(), RepositoryError> {
        let record = OfferMapper::to_persistence(offer);
        self.records.upsert(record.offer_id, record);
        Ok(())
    }

    async fn delete(&self, offer_id: &OfferId) -> Result<(), RepositoryError> {
        self.records.remove(offer_id.as_uuid());
        Ok(())
    }
}
