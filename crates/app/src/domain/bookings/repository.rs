//! Bookings Repository

use bliss::prelude::StandardDuration;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    bookings::{
        data::{BookingScope, NewBooking},
        records::{BookingRecord, BookingStatus, BookingUuid},
    },
    hotels::records::HotelUuid,
    profiles::records::ProfileUuid,
    treatments::records::TreatmentUuid,
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: NewBooking,
    ) -> Result<BookingRecord, sqlx::Error> {
        let duration_minutes = i32::try_from(booking.duration.minutes())
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(booking.uuid.into_uuid())
            .bind(booking.created_by.into_uuid())
            .bind(booking.customer_uuid.map(ProfileUuid::into_uuid))
            .bind(booking.hotel_uuid.map(HotelUuid::into_uuid))
            .bind(booking.staff_uuid.map(ProfileUuid::into_uuid))
            .bind(booking.treatment_uuid.into_uuid())
            .bind(duration_minutes)
            .bind(SqlxTimestamp::from(booking.scheduled_at))
            .bind(booking.guest_name)
            .bind(booking.notes)
            .bind(booking.status.as_str())
            .bind(booking.base_price)
            .bind(booking.final_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        scope: BookingScope,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_SQL)
            .bind(scope.hotel().map(HotelUuid::into_uuid))
            .bind(scope.staff().map(ProfileUuid::into_uuid))
            .bind(scope.customer().map(ProfileUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }
}

fn decode_error(
    column: &str,
    error: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(error),
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let duration_minutes: i32 = row.try_get("duration_minutes")?;

        let duration = u32::try_from(duration_minutes)
            .map_err(|e| decode_error("duration_minutes", e))
            .and_then(|minutes| {
                StandardDuration::try_from(minutes)
                    .map_err(|e| decode_error("duration_minutes", e))
            })?;

        let status = row
            .try_get::<String, _>("status")?
            .parse::<BookingStatus>()
            .map_err(|e| decode_error("status", e))?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            created_by: ProfileUuid::from_uuid(row.try_get("created_by")?),
            customer_uuid: row
                .try_get::<Option<Uuid>, _>("customer_uuid")?
                .map(ProfileUuid::from_uuid),
            hotel_uuid: row
                .try_get::<Option<Uuid>, _>("hotel_uuid")?
                .map(HotelUuid::from_uuid),
            staff_uuid: row
                .try_get::<Option<Uuid>, _>("staff_uuid")?
                .map(ProfileUuid::from_uuid),
            treatment_uuid: TreatmentUuid::from_uuid(row.try_get("treatment_uuid")?),
            duration,
            scheduled_at: row.try_get::<SqlxTimestamp, _>("scheduled_at")?.to_jiff(),
            guest_name: row.try_get("guest_name")?,
            notes: row.try_get("notes")?,
            status,
            base_price: row.try_get("base_price")?,
            final_price: row.try_get("final_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
