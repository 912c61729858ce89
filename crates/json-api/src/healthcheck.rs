//! Bliss JSON API Healthcheck Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Deployment environment
    pub environment: String,

    /// Server time, RFC 3339
    #[salvo(schema(value_type = String))]
    pub timestamp: Timestamp,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        environment: state.environment.to_string(),
        timestamp: Timestamp::now(),
    }))
}
