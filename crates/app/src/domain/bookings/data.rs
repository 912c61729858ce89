//! Bookings Data

use bliss::prelude::StandardDuration;
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    bookings::records::{BookingStatus, BookingUuid},
    hotels::records::HotelUuid,
    profiles::records::ProfileUuid,
    treatments::records::TreatmentUuid,
};

/// Booking Request
///
/// What a caller asks for. Who the booking is for and which price applies
/// is decided from the caller's role, see [`super::planning`].
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub treatment_uuid: TreatmentUuid,
    pub duration_minutes: u32,
    pub scheduled_at: Timestamp,
    pub customer_uuid: Option<ProfileUuid>,
    pub hotel_uuid: Option<HotelUuid>,
    pub staff_uuid: Option<ProfileUuid>,
    pub guest_name: Option<String>,
    pub notes: Option<String>,
}

/// New Booking Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub uuid: BookingUuid,
    pub created_by: ProfileUuid,
    pub customer_uuid: Option<ProfileUuid>,
    pub hotel_uuid: Option<HotelUuid>,
    pub staff_uuid: Option<ProfileUuid>,
    pub treatment_uuid: TreatmentUuid,
    pub duration: StandardDuration,
    pub scheduled_at: Timestamp,
    pub guest_name: Option<String>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub base_price: Decimal,
    pub final_price: Decimal,
}

/// Which bookings a caller may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    All,
    Hotel(HotelUuid),
    Staff(ProfileUuid),
    Customer(ProfileUuid),
}

impl BookingScope {
    /// Hotel filter, when the scope has one.
    #[must_use]
    pub const fn hotel(self) -> Option<HotelUuid> {
        match self {
            Self::Hotel(hotel) => Some(hotel),
            _ => None,
        }
    }

    /// Assigned therapist filter, when the scope has one.
    #[must_use]
    pub const fn staff(self) -> Option<ProfileUuid> {
        match self {
            Self::Staff(staff) => Some(staff),
            _ => None,
        }
    }

    /// Customer filter, when the scope has one.
    #[must_use]
    pub const fn customer(self) -> Option<ProfileUuid> {
        match self {
            Self::Customer(customer) => Some(customer),
            _ => None,
        }
    }
}
