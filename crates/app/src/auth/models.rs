//! Auth data models.

use crate::{
    auth::{Role, SupabaseClaims},
    domain::{
        hotels::records::HotelUuid,
        profiles::records::{ProfileRecord, ProfileUuid},
    },
};

/// A verified caller: the access token's subject joined with its profile row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Profile (and auth user) id.
    pub uuid: ProfileUuid,

    /// Email from the token, falling back to the profile row.
    pub email: Option<String>,

    /// Platform role from `profiles.role`.
    pub role: Role,

    /// Hotel the profile belongs to, for `HOTEL` accounts.
    pub hotel_uuid: Option<HotelUuid>,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn from_parts(claims: SupabaseClaims, profile: ProfileRecord) -> Self {
        Self {
            uuid: profile.uuid,
            email: claims.email.or(profile.email),
            role: profile.role,
            hotel_uuid: profile.hotel_uuid,
        }
    }
}
