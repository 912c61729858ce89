//! Hotel Records

use crate::uuids::TypedUuid;

/// Hotel UUID
pub type HotelUuid = TypedUuid<HotelRecord>;

/// Partner hotel. Hotels are managed in the admin console; the API only
/// references them by id.
#[derive(Debug, Clone)]
pub struct HotelRecord;
