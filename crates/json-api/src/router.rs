//! App Router

use salvo::Router;

use crate::{api_info, auth, bookings, healthcheck, pricing};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .get(api_info::handler)
                .push(Router::with_path("pricing/quote").get(pricing::quote::handler))
                .push(
                    Router::with_path("secure-bookings")
                        .hoop(auth::middleware::handler)
                        .push(
                            Router::with_path("bookings")
                                .get(bookings::index::handler)
                                .post(bookings::create::handler),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        catcher::Catcher,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bliss_app::auth::MockAuthService;

    use crate::{
        api_info::ApiInfoResponse,
        errors::{ErrorCode, ErrorEnvelope, error_envelope},
        test_helpers::state_with_auth,
    };

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_auth(auth)))
                .push(app_router()),
        )
        .catcher(Catcher::default().hoop(error_envelope))
    }

    fn strict_auth() -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        auth
    }

    #[tokio::test]
    async fn public_routes_skip_authentication() -> TestResult {
        let mut res = TestClient::get("http://example.com/api")
            .send(&make_service(strict_auth()))
            .await;

        let body: ApiInfoResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Bliss at Home API");

        let res = TestClient::get("http://example.com/health")
            .send(&make_service(strict_auth()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn bookings_require_a_token() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/secure-bookings/bookings")
            .send(&make_service(strict_auth()))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.error.code, ErrorCode::Unauthorized);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped_404() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/treatments")
            .send(&make_service(strict_auth()))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error.code, ErrorCode::NotFound);
        assert_eq!(body.error.message, "Route GET /api/treatments not found");

        Ok(())
    }
}
