//! Booking request and response bodies.

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bliss_app::domain::{
    bookings::{data::BookingRequest, records::BookingRecord},
    hotels::records::HotelUuid,
    profiles::records::ProfileUuid,
    treatments::records::TreatmentUuid,
};

/// Create Booking Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBookingRequest {
    /// Treatment to book.
    pub service_id: Uuid,

    /// Session length: 60, 90 or 120.
    pub duration_minutes: u32,

    /// Appointment start, RFC 3339.
    #[salvo(schema(value_type = String))]
    pub scheduled_at: Timestamp,

    /// Customer profile; admins only, customers always book for themselves.
    #[serde(default)]
    pub customer_id: Option<Uuid>,

    /// Hotel; admins only, hotel accounts always book for their own hotel.
    #[serde(default)]
    pub hotel_id: Option<Uuid>,

    /// Assigned therapist; admins only.
    #[serde(default)]
    pub staff_id: Option<Uuid>,

    /// Guest name, required for hotel bookings.
    #[serde(default)]
    pub guest_name: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(request: CreateBookingRequest) -> Self {
        BookingRequest {
            treatment_uuid: TreatmentUuid::from_uuid(request.service_id),
            duration_minutes: request.duration_minutes,
            scheduled_at: request.scheduled_at,
            customer_uuid: request.customer_id.map(ProfileUuid::from_uuid),
            hotel_uuid: request.hotel_id.map(HotelUuid::from_uuid),
            staff_uuid: request.staff_id.map(ProfileUuid::from_uuid),
            guest_name: request.guest_name,
            notes: request.notes,
        }
    }
}

/// Booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    pub id: Uuid,
    pub created_by: Uuid,
    pub customer_id: Option<Uuid>,
    pub hotel_id: Option<Uuid>,
    pub staff_id: Option<Uuid>,
    pub service_id: Uuid,
    pub duration_minutes: u32,

    #[salvo(schema(value_type = String))]
    pub scheduled_at: Timestamp,

    pub guest_name: Option<String>,
    pub notes: Option<String>,
    pub status: String,

    /// Standard price for the duration, in baht.
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub base_price: Decimal,

    /// Price charged, in baht.
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub final_price: Decimal,

    #[salvo(schema(value_type = String))]
    pub created_at: Timestamp,

    #[salvo(schema(value_type = String))]
    pub updated_at: Timestamp,
}

impl From<BookingRecord> for BookingResponse {
    fn from(record: BookingRecord) -> Self {
        Self {
            id: record.uuid.into_uuid(),
            created_by: record.created_by.into_uuid(),
            customer_id: record.customer_uuid.map(ProfileUuid::into_uuid),
            hotel_id: record.hotel_uuid.map(HotelUuid::into_uuid),
            staff_id: record.staff_uuid.map(ProfileUuid::into_uuid),
            service_id: record.treatment_uuid.into_uuid(),
            duration_minutes: record.duration.minutes(),
            scheduled_at: record.scheduled_at,
            guest_name: record.guest_name,
            notes: record.notes,
            status: record.status.to_string(),
            base_price: record.base_price,
            final_price: record.final_price,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Booking Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingEnvelope {
    pub success: bool,
    pub data: BookingResponse,
}

/// Bookings Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingsEnvelope {
    pub success: bool,
    pub data: Vec<BookingResponse>,
}
