//! Profile Records

use crate::{auth::Role, domain::hotels::records::HotelUuid, uuids::TypedUuid};

/// Profile UUID, shared with the Supabase auth user id.
pub type ProfileUuid = TypedUuid<ProfileRecord>;

/// Profile Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub uuid: ProfileUuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Role,
    pub hotel_uuid: Option<HotelUuid>,
}
