//! Treatments Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::treatments::records::{TreatmentRecord, TreatmentUuid};

const FIND_TREATMENT_SQL: &str = include_str!("sql/find_treatment.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTreatmentsRepository;

impl PgTreatmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_treatment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        treatment: TreatmentUuid,
    ) -> Result<Option<TreatmentRecord>, sqlx::Error> {
        query_as::<Postgres, TreatmentRecord>(FIND_TREATMENT_SQL)
            .bind(treatment.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TreatmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TreatmentUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            base_price_60min: row.try_get("base_price_60")?,
            hotel_price_60min: row.try_get("hotel_price_60")?,
            is_active: row.try_get("is_active")?,
        })
    }
}
