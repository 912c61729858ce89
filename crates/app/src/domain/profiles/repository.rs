//! Profiles Repository
//!
//! Profiles are read with the server's own connection: the caller's profile
//! is what decides which role the rest of the request runs under.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, Postgres, Row, postgres::PgRow, query};
use uuid::Uuid;

use crate::{
    auth::Role,
    domain::{
        hotels::records::HotelUuid,
        profiles::{
            errors::ProfilesRepositoryError,
            records::{ProfileRecord, ProfileUuid},
        },
    },
};

const FIND_PROFILE_SQL: &str = include_str!("sql/find_profile.sql");
const UPDATE_ROLE_SQL: &str = include_str!("sql/update_role.sql");

#[derive(Debug, Clone)]
pub struct PgProfilesRepository {
    pool: PgPool,
}

impl PgProfilesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfilesRepository for PgProfilesRepository {
    async fn find_profile(
        &self,
        profile: ProfileUuid,
    ) -> Result<Option<ProfileRecord>, ProfilesRepositoryError> {
        let row = query::<Postgres>(FIND_PROFILE_SQL)
            .bind(profile.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(profile_from_row).transpose()
    }

    async fn update_role(
        &self,
        profile: ProfileUuid,
        role: Role,
        hotel: Option<HotelUuid>,
    ) -> Result<ProfileRecord, ProfilesRepositoryError> {
        let row = query::<Postgres>(UPDATE_ROLE_SQL)
            .bind(profile.into_uuid())
            .bind(role.as_str())
            .bind(hotel.map(HotelUuid::into_uuid))
            .fetch_one(&self.pool)
            .await?;

        profile_from_row(&row)
    }
}

fn profile_from_row(row: &PgRow) -> Result<ProfileRecord, ProfilesRepositoryError> {
    let role: String = row.try_get("role")?;

    Ok(ProfileRecord {
        uuid: ProfileUuid::from_uuid(row.try_get("uuid")?),
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        role: role.parse()?,
        hotel_uuid: row
            .try_get::<Option<Uuid>, _>("hotel_uuid")?
            .map(HotelUuid::from_uuid),
    })
}

#[automock]
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    /// Look up a profile by its auth user id.
    async fn find_profile(
        &self,
        profile: ProfileUuid,
    ) -> Result<Option<ProfileRecord>, ProfilesRepositoryError>;

    /// Change a profile's role and hotel assignment.
    async fn update_role(
        &self,
        profile: ProfileUuid,
        role: Role,
        hotel: Option<HotelUuid>,
    ) -> Result<ProfileRecord, ProfilesRepositoryError>;
}
