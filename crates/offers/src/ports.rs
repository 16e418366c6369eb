//! Repository port consumed by the offer use cases.

use std::sync::Arc;

use async_trait::async_trait;

use hireboard_core::{OfferId, RepositoryError};

use crate::offer::Offer;

/// Persistence contract for offers.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn exists(&self, offer_id: &OfferId) -> Result<bool, RepositoryError>;

    async fn get_offer_by_id(&self, offer_id: &OfferId) -> Result<Offer, RepositoryError>;

    /// Insert or replace the offer with the same id.
    async fn persist(&self, offer: &Offer) -> Result<(), RepositoryError>;

    /// Remove an offer. Removing an absent offer is a no-op.
    async fn delete(&self, offer_id: &OfferId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R> OfferRepository for Arc<R>
where
    R: OfferRepository + ?Sized,
{
    async fn exists(&self, offer_id: &OfferId) -> Result<bool, RepositoryError> {
        (**self).exists(offer_id).await
    }

    async fn get_offer_by_id(&self, offer_id: &OfferId) -> Result<Offer, RepositoryError> {
        (**self).get_offer_by_id(offer_id).await
    }

    async fn persist(&self, offer: &Offer) -> Result<(), RepositoryError> {
        (**self).persist(offer).await
    }

    async fn delete(&self, offer_id: &OfferId) -> Result<(), RepositoryError> {
        (**self).delete(offer_id).await
    }
}
