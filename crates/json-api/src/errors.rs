//! API error envelope.
//!
//! Every failure leaves the server as
//! `{ "success": false, "error": { "code": ..., "message": ... } }`.

use std::sync::Arc;

use salvo::{
    http::{Method, ResBody},
    oapi::{self, Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bliss_app::auth::AuthorizationError;

use crate::state::State;

/// Message returned in place of internal error details in production.
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Machine-readable error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum ErrorCode {
    Unauthorized,
    Forbidden,
    NotFound,
    ValidationError,
    Conflict,
    InternalError,
}

/// An error raised while handling a request.
///
/// Operational errors are expected failures (bad input, missing token) whose
/// message is always safe to show. Anything else is a bug or an outage and
/// its message is hidden in production.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code:?} ({status}): {message}")]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) code: ErrorCode,
    pub(crate) message: String,
    pub(crate) operational: bool,
}

impl ApiError {
    fn operational(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            operational: true,
        }
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, message)
    }

    pub(crate) fn forbidden(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::FORBIDDEN, ErrorCode::Forbidden, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::NOT_FOUND, ErrorCode::NotFound, message)
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::BAD_REQUEST, ErrorCode::ValidationError, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::CONFLICT, ErrorCode::Conflict, message)
    }

    /// A non-operational failure.
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: ErrorCode::InternalError,
            message: message.into(),
            operational: false,
        }
    }

    /// 404 for a request no route matched.
    pub(crate) fn route_not_found(method: &Method, path: &str) -> Self {
        Self::not_found(format!("Route {method} {path} not found"))
    }

    /// Envelope an error status raised by salvo itself, such as a failed
    /// body extraction.
    pub(crate) fn from_status(status: StatusCode, brief: &str) -> Self {
        let message = if brief.is_empty() {
            status.canonical_reason().unwrap_or("Request failed")
        } else {
            brief
        };

        match status {
            StatusCode::UNAUTHORIZED => Self::unauthorized(message),
            StatusCode::FORBIDDEN => Self::forbidden(message),
            StatusCode::NOT_FOUND => Self::not_found(message),
            StatusCode::CONFLICT => Self::conflict(message),
            status if status.is_client_error() => {
                Self::operational(status, ErrorCode::ValidationError, message)
            }
            status => Self {
                status,
                ..Self::internal(message)
            },
        }
    }

    /// The body sent to clients.
    pub(crate) fn envelope(&self, environment_is_production: bool) -> ErrorEnvelope {
        let message = if environment_is_production && !self.operational {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.message.clone()
        };

        ErrorEnvelope {
            success: false,
            error: ErrorBody {
                code: self.code,
                message,
            },
        }
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(error: AuthorizationError) -> Self {
        Self::forbidden(format!("Role {} is not allowed to access this resource", error.role))
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,

    /// What went wrong.
    pub error: ErrorBody,
}

/// Error code and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

#[async_trait]
impl Writer for ApiError {
    async fn write(self, _req: &mut Request, depot: &mut Depot, res: &mut Response) {
        // Without state the environment is unknown; treat it as production.
        let production = match depot.obtain::<Arc<State>>() {
            Ok(state) => state.environment.is_production(),
            Err(_) => true,
        };

        res.status_code(self.status);
        res.render(Json(self.envelope(production)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        let schema = ErrorEnvelope::to_schema(components);

        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Validation error"),
            (StatusCode::UNAUTHORIZED, "Missing or invalid access token"),
            (StatusCode::FORBIDDEN, "Role not permitted"),
            (StatusCode::NOT_FOUND, "Not found"),
            (StatusCode::CONFLICT, "Conflict"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", Content::new(schema.clone())),
            );
        }
    }
}

/// Catcher hoop turning bare error statuses into the error envelope.
#[handler]
pub(crate) async fn error_envelope(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let brief = match &res.body {
        ResBody::Error(error) => error.brief.clone(),
        _ => String::new(),
    };

    let error = if status == StatusCode::NOT_FOUND && brief.is_empty() {
        ApiError::route_not_found(req.method(), req.uri().path())
    } else {
        ApiError::from_status(status, &brief)
    };

    res.body(ResBody::None);
    error.write(req, depot, res).await;

    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        catcher::Catcher,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bliss_app::auth::Role;

    use crate::{config::AppEnvironment, test_helpers::strict_state};

    use super::*;

    #[handler]
    async fn failing() -> Result<&'static str, ApiError> {
        Err(ApiError::internal("connection refused by 10.0.0.3"))
    }

    #[handler]
    async fn rejected() -> Result<&'static str, ApiError> {
        Err(ApiError::validation("duration_minutes must be 60, 90 or 120"))
    }

    fn service(environment: AppEnvironment) -> Service {
        let router = Router::new()
            .hoop(inject(strict_state(environment)))
            .push(Router::with_path("failing").get(failing))
            .push(Router::with_path("rejected").get(rejected));

        Service::new(router).catcher(Catcher::default().hoop(error_envelope))
    }

    #[tokio::test]
    async fn internal_message_is_hidden_in_production() -> TestResult {
        let mut res = TestClient::get("http://example.com/failing")
            .send(&service(AppEnvironment::Production))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!body.success);
        assert_eq!(body.error.code, ErrorCode::InternalError);
        assert_eq!(body.error.message, INTERNAL_ERROR_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn internal_message_is_shown_in_development() -> TestResult {
        let body: ErrorEnvelope = TestClient::get("http://example.com/failing")
            .send(&service(AppEnvironment::Development))
            .await
            .take_json()
            .await?;

        assert_eq!(body.error.message, "connection refused by 10.0.0.3");

        Ok(())
    }

    #[tokio::test]
    async fn operational_message_is_kept_in_production() -> TestResult {
        let mut res = TestClient::get("http://example.com/rejected")
            .send(&service(AppEnvironment::Production))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error.code, ErrorCode::ValidationError);
        assert_eq!(body.error.message, "duration_minutes must be 60, 90 or 120");

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_route_names_method_and_path() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/nowhere")
            .send(&service(AppEnvironment::Production))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error.code, ErrorCode::NotFound);
        assert_eq!(body.error.message, "Route POST /api/nowhere not found");

        Ok(())
    }

    #[test]
    fn authorization_errors_are_forbidden() {
        let error = ApiError::from(AuthorizationError { role: Role::Staff });

        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.code, ErrorCode::Forbidden);
        assert!(error.operational);
    }

    #[test]
    fn salvo_statuses_map_to_codes() {
        assert_eq!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "parse error").code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, "").code,
            ErrorCode::Unauthorized
        );
        assert!(!ApiError::from_status(StatusCode::BAD_GATEWAY, "").operational);
    }
}
