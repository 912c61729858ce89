use bliss_app::{
    auth::Role,
    database,
    domain::{
        hotels::records::HotelUuid,
        profiles::{PgProfilesRepository, ProfilesRepository, records::ProfileUuid},
    },
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct SetRoleArgs {
    /// Administrative PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Profile (auth user) id
    #[arg(long)]
    profile_uuid: Uuid,

    /// New role: ADMIN, HOTEL, STAFF or CUSTOMER
    #[arg(long)]
    role: Role,

    /// Hotel the profile belongs to; required for HOTEL
    #[arg(long)]
    hotel_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: SetRoleArgs) -> Result<(), String> {
    if args.role == Role::Hotel && args.hotel_uuid.is_none() {
        return Err("--hotel-uuid is required for HOTEL profiles".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let profile = PgProfilesRepository::new(pool)
        .update_role(
            ProfileUuid::from_uuid(args.profile_uuid),
            args.role,
            args.hotel_uuid.map(HotelUuid::from_uuid),
        )
        .await
        .map_err(|error| format!("failed to update profile: {error}"))?;

    println!("profile_uuid: {}", profile.uuid);
    println!("role: {}", profile.role);

    if let Some(hotel) = profile.hotel_uuid {
        println!("hotel_uuid: {hotel}");
    }

    Ok(())
}
