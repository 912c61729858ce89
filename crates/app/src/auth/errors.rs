//! Auth service errors.

use thiserror::Error;

use crate::{auth::TokenError, domain::profiles::ProfilesRepositoryError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("no profile for token subject")]
    NotFound,

    #[error("token rejected")]
    Token(#[source] TokenError),

    #[error("profile lookup failed")]
    Profiles(#[source] ProfilesRepositoryError),
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        Self::Token(error)
    }
}

impl From<ProfilesRepositoryError> for AuthServiceError {
    fn from(error: ProfilesRepositoryError) -> Self {
        match error {
            ProfilesRepositoryError::NotFound => Self::NotFound,
            error => Self::Profiles(error),
        }
    }
}
