//! Bookings service errors.

use bliss::prelude::DurationError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::AuthorizationError;

/// SQLSTATE raised when a row-level security policy rejects a statement.
const INSUFFICIENT_PRIVILEGE: &str = "42501";

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error("not permitted to perform this booking action")]
    Forbidden,

    #[error("duration is not offered")]
    UnsupportedDuration(#[from] DurationError),

    #[error("treatment not found or inactive")]
    ServiceNotFound,

    #[error("booking already exists")]
    AlreadyExists,

    #[error("booking not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("hotel bookings need a guest name")]
    MissingGuestName,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<AuthorizationError> for BookingsServiceError {
    fn from(_: AuthorizationError) -> Self {
        Self::Forbidden
    }
}

impl From<Error> for BookingsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == INSUFFICIENT_PRIVILEGE)
        {
            return Self::Forbidden;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
