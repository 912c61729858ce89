//! Bookings service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::AuthenticatedUser,
    database::Db,
    domain::{
        bookings::{
            errors::BookingsServiceError,
            data::{BookingRequest, BookingScope},
            planning::BookingPlan,
            records::BookingRecord,
            repository::PgBookingsRepository,
        },
        treatments::repository::PgTreatmentsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    bookings: PgBookingsRepository,
    treatments: PgTreatmentsRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            bookings: PgBookingsRepository::new(),
            treatments: PgTreatmentsRepository::new(),
        }
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    #[tracing::instrument(
        name = "bookings.service.create_booking",
        skip(self, actor, request),
        fields(
            actor_uuid = %actor.uuid,
            role = %actor.role,
            treatment_uuid = %request.treatment_uuid,
            duration_minutes = request.duration_minutes
        ),
        err
    )]
    async fn create_booking(
        &self,
        actor: &AuthenticatedUser,
        request: BookingRequest,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let plan = BookingPlan::prepare(actor, request)?;

        let mut tx = self.db.begin_user_transaction(actor).await?;

        let treatment = self
            .treatments
            .find_treatment(&mut tx, plan.request.treatment_uuid)
            .await?
            .ok_or(BookingsServiceError::ServiceNotFound)?;

        let booking = plan.into_new_booking(&treatment)?;

        let record = self.bookings.create_booking(&mut tx, booking).await?;

        tx.commit().await?;

        info!(
            booking_uuid = %record.uuid,
            final_price = %record.final_price,
            "created booking"
        );

        Ok(record)
    }

    #[tracing::instrument(
        name = "bookings.service.list_bookings",
        skip(self, actor),
        fields(actor_uuid = %actor.uuid, role = %actor.role),
        err
    )]
    async fn list_bookings(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let scope = BookingScope::for_user(actor)?;

        let mut tx = self.db.begin_user_transaction(actor).await?;

        let bookings = self.bookings.list_bookings(&mut tx, scope).await?;

        tx.commit().await?;

        Ok(bookings)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Create a booking on behalf of the caller, priced for the requested duration.
    async fn create_booking(
        &self,
        actor: &AuthenticatedUser,
        request: BookingRequest,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Bookings visible to the caller, newest first.
    async fn list_bookings(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;
}
