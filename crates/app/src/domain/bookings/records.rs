//! Booking Records

use std::{fmt, str::FromStr};

use bliss::prelude::StandardDuration;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        hotels::records::HotelUuid, profiles::records::ProfileUuid,
        treatments::records::TreatmentUuid,
    },
    uuids::TypedUuid,
};

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// A `bookings.status` value that is not one of the known statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown booking status: {0}")]
pub struct UnknownStatusError(pub String);

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        Self::Pending,
        Self::Confirmed,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatusError(value.to_string()))
    }
}

/// Booking Record
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
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

    /// Standard price for the booked duration.
    pub base_price: Decimal,

    /// Price charged: the hotel-partner price for hotel bookings.
    pub final_price: Decimal,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn statuses_round_trip_through_strings() -> TestResult {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn new_bookings_default_to_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(
            "pending".parse::<BookingStatus>(),
            Err(UnknownStatusError("pending".to_string()))
        );
    }
}
