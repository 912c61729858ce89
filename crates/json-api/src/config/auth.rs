//! Auth Config

use bliss_app::auth::{DEFAULT_AUDIENCE, JwtVerifier};
use clap::Args;

/// Supabase token verification settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Supabase project JWT secret
    #[arg(long, env = "SUPABASE_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Expected token audience
    #[arg(long, env = "SUPABASE_JWT_AUDIENCE", default_value = DEFAULT_AUDIENCE)]
    pub jwt_audience: String,
}

impl AuthConfig {
    /// Build the token verifier, consuming the secret.
    #[must_use]
    pub fn into_verifier(self) -> JwtVerifier {
        JwtVerifier::from_secret(self.jwt_secret, &self.jwt_audience)
    }
}
