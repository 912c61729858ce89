//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{AuthServiceError, AuthenticatedUser, JwtVerifier},
    domain::profiles::{ProfilesRepository, records::ProfileUuid},
};

/// Authenticates Supabase access tokens against the `profiles` table.
#[derive(Clone)]
pub struct JwtAuthService {
    verifier: JwtVerifier,
    profiles: Arc<dyn ProfilesRepository>,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(verifier: JwtVerifier, profiles: Arc<dyn ProfilesRepository>) -> Self {
        Self { verifier, profiles }
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        let claims = self.verifier.verify(bearer_token)?;

        let profile = self
            .profiles
            .find_profile(ProfileUuid::from_uuid(claims.sub))
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        Ok(AuthenticatedUser::from_parts(claims, profile))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the calling user.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedUser, AuthServiceError>;
}
