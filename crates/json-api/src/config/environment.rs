//! Environment Config

use std::fmt;

use clap::Args;

/// Deployment environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AppEnvironment {
    /// Local development: internal error messages are returned to clients.
    #[default]
    Development,

    /// Production: internal error messages are replaced with a generic one.
    Production,
}

impl AppEnvironment {
    /// Name reported by the health endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Whether internal error details must be hidden from clients.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment settings.
#[derive(Debug, Args)]
pub struct EnvironmentConfig {
    /// Deployment environment (development, production)
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = AppEnvironment::Development)]
    pub app_env: AppEnvironment,
}
