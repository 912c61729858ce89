//! Supabase JWT verification.

use std::fmt;

use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode,
    errors::{Error, ErrorKind},
};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::auth::SupabaseClaims;

/// Audience Supabase issues to signed-in users.
pub const DEFAULT_AUDIENCE: &str = "authenticated";

/// Reasons an access token was rejected.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed")]
    Malformed(#[source] Error),

    #[error("token was rejected")]
    Invalid(#[source] Error),
}

impl From<Error> for TokenError {
    fn from(error: Error) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => Self::Malformed(error),
            _ => Self::Invalid(error),
        }
    }
}

/// Verifies HS256 access tokens signed with the project's JWT secret.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    #[must_use]
    pub fn new(secret: &[u8], audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);

        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Build a verifier, wiping the secret from memory once the key is derived.
    #[must_use]
    pub fn from_secret(secret: String, audience: &str) -> Self {
        let secret = Zeroizing::new(secret);

        Self::new(secret.as_bytes(), audience)
    }

    /// Verify the signature, audience and expiry of a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<SupabaseClaims, TokenError> {
        decode::<SupabaseClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }
}

impl fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("audience", &self.validation.aud)
            .finish_non_exhaustive()
    }
}
