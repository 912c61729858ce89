//! List Bookings Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bookings::{errors::into_api_error, models::BookingsEnvelope},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// List Bookings Handler
///
/// Admins see every booking, hotels their own hotel's, staff the bookings
/// assigned to them and customers their own. Newest first.
#[endpoint(
    tags("bookings"),
    summary = "List Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Bookings visible to the caller"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BookingsEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.user_or_401()?;

    let bookings = state
        .app
        .bookings
        .list_bookings(caller)
        .await
        .map_err(into_api_error)?;

    Ok(Json(BookingsEnvelope {
        success: true,
        data: bookings.into_iter().map(Into::into).collect(),
    }))
}
