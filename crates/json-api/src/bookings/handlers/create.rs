//! Create Booking Handler

use std::sync::Arc;

use bliss_app::domain::bookings::planning::BOOKING_ROLES;
use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    bookings::{
        errors::into_api_error,
        models::{BookingEnvelope, CreateBookingRequest},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Booking Handler
///
/// The caller's role decides who the booking is for and whether the
/// hotel-partner rate applies.
#[endpoint(
    tags("bookings"),
    summary = "Create Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.user_or_401()?;

    caller.require_any_role(&BOOKING_ROLES)?;

    let booking = state
        .app
        .bookings
        .create_booking(caller, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    info!(booking_uuid = %booking.uuid, role = %caller.role, "booking created");

    res.add_header(
        LOCATION,
        format!("/api/secure-bookings/bookings/{}", booking.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(BookingEnvelope {
        success: true,
        data: booking.into(),
    }))
}
