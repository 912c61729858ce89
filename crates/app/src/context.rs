//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService, JwtVerifier},
    database::{self, Db},
    domain::{
        bookings::{BookingsService, PgBookingsService},
        profiles::PgProfilesRepository,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub bookings: Arc<dyn BookingsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        verifier: JwtVerifier,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let profiles = Arc::new(PgProfilesRepository::new(pool.clone()));

        Ok(Self {
            bookings: Arc::new(PgBookingsService::new(Db::new(pool))),
            auth: Arc::new(JwtAuthService::new(verifier, profiles)),
        })
    }
}
