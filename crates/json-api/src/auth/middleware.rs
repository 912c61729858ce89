//! Auth middleware.
//!
//! Resolves the `Authorization: Bearer <access token>` header to the calling
//! profile and stores it in the depot for the handlers below.

use std::sync::Arc;

use bliss_app::auth::{AuthServiceError, AuthenticatedUser};
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{debug, error};

use crate::{errors::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let token = extract_bearer_token(req).map(str::to_owned);

    let result = match depot.obtain_or_500::<Arc<State>>().cloned() {
        Ok(state) => authenticate(&state, token.as_deref()).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(user) => {
            depot.insert_user(user);

            ctrl.call_next(req, depot, res).await;
        }
        Err(error) => {
            error.write(req, depot, res).await;

            ctrl.skip_rest();
        }
    }
}

async fn authenticate(
    state: &State,
    token: Option<&str>,
) -> Result<AuthenticatedUser, ApiError> {
    let token =
        token.ok_or_else(|| ApiError::unauthorized("Missing or invalid Authorization header"))?;

    match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => Ok(user),
        Err(AuthServiceError::NotFound) => {
            Err(ApiError::unauthorized("No profile found for this user"))
        }
        Err(AuthServiceError::Token(source)) => {
            debug!("rejected access token: {source}");

            Err(ApiError::unauthorized("Invalid or expired token"))
        }
        Err(AuthServiceError::Profiles(source)) => {
            error!("failed to load caller profile: {source}");

            Err(ApiError::internal(format!("failed to load caller profile: {source}")))
        }
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
