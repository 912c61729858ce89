//! Booking Handlers

pub(crate) mod create;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use bliss::prelude::StandardDuration;
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use bliss_app::{
        auth::AuthenticatedUser,
        domain::{
            bookings::records::{BookingRecord, BookingStatus, BookingUuid},
            treatments::records::TreatmentUuid,
        },
    };

    pub(crate) fn make_booking(caller: &AuthenticatedUser) -> BookingRecord {
        BookingRecord {
            uuid: BookingUuid::new(),
            created_by: caller.uuid,
            customer_uuid: Some(caller.uuid),
            hotel_uuid: caller.hotel_uuid,
            staff_uuid: None,
            treatment_uuid: TreatmentUuid::new(),
            duration: StandardDuration::Ninety,
            scheduled_at: Timestamp::UNIX_EPOCH,
            guest_name: None,
            notes: None,
            status: BookingStatus::Pending,
            base_price: Decimal::from(990),
            final_price: Decimal::from(990),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
