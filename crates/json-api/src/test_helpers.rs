//! Test helpers.

use std::sync::Arc;

use bliss_app::{
    auth::{AuthenticatedUser, MockAuthService, Role},
    context::AppContext,
    domain::{
        bookings::MockBookingsService,
        hotels::records::HotelUuid,
        profiles::records::ProfileUuid,
    },
};
use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use crate::{config::AppEnvironment, errors::error_envelope, extensions::*, state::State};

pub(crate) fn customer() -> AuthenticatedUser {
    user(Role::Customer, None)
}

pub(crate) fn user(role: Role, hotel_uuid: Option<HotelUuid>) -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: ProfileUuid::new(),
        email: Some("caller@example.com".to_string()),
        role,
        hotel_uuid,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_create_booking().never();
    bookings.expect_list_bookings().never();

    bookings
}

fn state(
    bookings: MockBookingsService,
    auth: MockAuthService,
    environment: AppEnvironment,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            bookings: Arc::new(bookings),
            auth: Arc::new(auth),
        },
        environment,
    )
}

/// State whose services fail the test if called.
pub(crate) fn strict_state(environment: AppEnvironment) -> Arc<State> {
    state(strict_bookings_mock(), strict_auth_mock(), environment)
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_bookings_mock(), auth, AppEnvironment::Development)
}

pub(crate) fn state_with_bookings(bookings: MockBookingsService) -> Arc<State> {
    state(bookings, strict_auth_mock(), AppEnvironment::Development)
}

/// Serve `route` with `bookings` as the service and `caller` already
/// authenticated.
pub(crate) fn bookings_service(
    bookings: MockBookingsService,
    caller: AuthenticatedUser,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_bookings(bookings)))
            .hoop(InjectCaller(caller))
            .push(route),
    )
    .catcher(Catcher::default().hoop(error_envelope))
}

#[derive(Debug)]
struct InjectCaller(AuthenticatedUser);

#[async_trait]
impl Handler for InjectCaller {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_user(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}
