use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use hireboard_core::{Entity, Mapper, OfferId, RepositoryError};
use hireboard_offers::{Offer, OfferMapper, OfferRecord, OfferRepository};

use super::map_sqlx_error;

fn offer_record(row: &PgRow) -> Result<OfferRecord, sqlx::Error> {
    Ok(OfferRecord {
        offer_id: row.try_get("offer_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        technology: row.try_get("technology")?,
        employment_type: row.try_get("employment_type")?,
        level: row.try_get("level")?,
        salary_min: row.try_get("salary_min")?,
        salary_max: row.try_get("salary_max")?,
        created_at: row.try_get("created_at")?,
    })
}

#[derive(Debug, Clone)]
pub struct PgOfferRepository {
    pool: PgPool,
}

impl PgOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferRepository for PgOfferRepository {
    #[instrument(skip(self), err)]
    async fn exists(&self, offer_id: &OfferId) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM offers WHERE offer_id = $1)")
            .bind(offer_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("offer_exists", e))?;
        row.try_get::<bool, _>(0)
            .map_err(|e| map_sqlx_error("offer_exists", e))
    }

    #[instrument(skip(self), err)]
    async fn get_offer_by_id(&self, offer_id: &OfferId) -> Result<Offer, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT offer_id, title, description, technology, employment_type, level,
                   salary_min, salary_max, created_at
            FROM offers
            WHERE offer_id = $1
            "#,
        )
        .bind(offer_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_offer_by_id", e))?
        .ok_or_else(|| RepositoryError::not_found("offer"))?;

        let record = offer_record(&row).map_err(|e| map_sqlx_error("get_offer_by_id", e))?;
        OfferMapper::to_domain(record)
    }

    #[instrument(skip(self, offer), fields(offer_id = %offer.id()), err)]
    async fn persist(&self, offer: &Offer) -> Result<(), RepositoryError> {
        let record = OfferMapper::to_persistence(offer);
        sqlx::query(
            r#"
            INSERT INTO offers (
                offer_id, title, description, technology, employment_type, level,
                salary_min, salary_max, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (offer_id)
            DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                technology = EXCLUDED.technology,
                employment_type = EXCLUDED.employment_type,
                level = EXCLUDED.level,
                salary_min = EXCLUDED.salary_min,
                salary_max = EXCLUDED.salary_max
            "#,
        )
        .bind(record.offer_id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.technology)
        .bind(&record.employment_type)
        .bind(&record.level)
        .bind(record.salary_min)
        .bind(record.salary_max)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("persist_offer", e))?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, offer_id: &OfferId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM offers WHERE offer_id = $1")
            .bind(offer_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_offer", e))?;
        Ok(())
    }
}
