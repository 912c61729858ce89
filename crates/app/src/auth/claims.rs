//! Supabase access token claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a Supabase Auth (GoTrue) access token.
///
/// `role` is the Postgres role (`authenticated`), not the platform role; the
/// platform role always comes from the caller's `profiles` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseClaims {
    /// Auth user id, equal to `profiles.id`.
    pub sub: Uuid,

    /// Audience, `authenticated` for signed-in users.
    pub aud: String,

    /// Expiry as a Unix timestamp.
    pub exp: i64,

    #[serde(default)]
    pub iat: Option<i64>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub session_id: Option<Uuid>,
}
