//! Depot helper extensions.

use std::any::Any;

use bliss_app::auth::AuthenticatedUser;
use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_user(&mut self, user: AuthenticatedUser);

    fn user_or_401(&self) -> Result<&AuthenticatedUser, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>()
            .map_err(|_ignored| ApiError::internal("request state is unavailable"))
    }

    fn insert_user(&mut self, user: AuthenticatedUser) {
        self.inject(user);
    }

    fn user_or_401(&self) -> Result<&AuthenticatedUser, ApiError> {
        self.obtain::<AuthenticatedUser>()
            .map_err(|_ignored| ApiError::unauthorized("Authentication required"))
    }
}
