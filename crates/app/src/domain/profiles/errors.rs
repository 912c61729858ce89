//! Profiles repository errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::UnknownRoleError;

#[derive(Debug, Error)]
pub enum ProfilesRepositoryError {
    #[error("profile not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("profile has an unknown role")]
    UnknownRole(#[from] UnknownRoleError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProfilesRepositoryError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
