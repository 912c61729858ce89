//! Booking Errors

use tracing::error;

use bliss_app::domain::bookings::BookingsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: BookingsServiceError) -> ApiError {
    match error {
        BookingsServiceError::Forbidden => {
            ApiError::forbidden("You are not allowed to make this booking")
        }
        BookingsServiceError::UnsupportedDuration(source) => ApiError::validation(source.to_string()),
        BookingsServiceError::ServiceNotFound => ApiError::not_found("Service not found"),
        BookingsServiceError::NotFound => ApiError::not_found("Booking not found"),
        BookingsServiceError::AlreadyExists => ApiError::conflict("Booking already exists"),
        BookingsServiceError::MissingGuestName => {
            ApiError::validation("guest_name is required for hotel bookings")
        }
        BookingsServiceError::MissingRequiredData => {
            ApiError::validation("A required booking field is missing")
        }
        BookingsServiceError::InvalidReference => {
            ApiError::validation("Referenced customer, hotel, staff or service does not exist")
        }
        BookingsServiceError::InvalidData => ApiError::validation("Invalid booking payload"),
        BookingsServiceError::Sql(source) => {
            error!("booking storage error: {source}");

            ApiError::internal(format!("booking storage error: {source}"))
        }
    }
}
