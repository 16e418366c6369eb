//! Persistence record for offers and its mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hireboard_core::{Entity, Mapper, OfferId, RepositoryError};

use crate::offer::{Offer, OfferProps};

/// Stored shape of an [`Offer`]. Vocabulary fields are kept as their text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub offer_id: Uuid,
    pub title: String,
    pub description: String,
    pub technology: String,
    pub employment_type: String,
    pub level: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub created_at: DateTime<Utc>,
}

pub struct OfferMapper;

impl Mapper for OfferMapper {
    type Domain = Offer;
    type Record = OfferRecord;

    fn to_domain(record: OfferRecord) -> Result<Offer, RepositoryError> {
        Offer::create(
            OfferId::from_uuid(record.offer_id),
            OfferProps {
                title: record.title,
                description: record.description,
                technology: record.technology,
                employment_type: record.employment_type,
                level: record.level,
                salary_min: record.salary_min,
                salary_max: record.salary_max,
                created_at: record.created_at,
            },
        )
        .map_err(|err| RepositoryError::malformed("offer", err.code()))
    }

    fn to_persistence(offer: &Offer) -> OfferRecord {
        OfferRecord {
            offer_id: *offer.id().as_uuid(),
            title: offer.title().to_string(),
            description: offer.description().to_string(),
            technology: offer.technology().as_str().to_string(),
            employment_type: offer.employment_type().as_str().to_string(),
            level: offer.level().as_str().to_string(),
            salary_min: offer.salary_min(),
            salary_max: offer.salary_max(),
            created_at: offer.created_at(),
        }
    }
}
