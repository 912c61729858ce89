//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, environment::EnvironmentConfig, logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod environment;
pub(crate) mod logging;
pub(crate) mod server;

pub(crate) use environment::AppEnvironment;
pub(crate) use logging::LogFormat;

/// Bliss JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "bliss-json", about = "Bliss at Home JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Deployment environment.
    #[command(flatten)]
    pub environment: EnvironmentConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Supabase token verification settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
