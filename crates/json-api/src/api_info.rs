//! API index handler.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Routes advertised by the index.
pub(crate) const ENDPOINTS: [&str; 5] = [
    "GET /health",
    "GET /api",
    "GET /api/pricing/quote",
    "GET /api/secure-bookings/bookings",
    "POST /api/secure-bookings/bookings",
];

/// API index response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoResponse {
    /// Service name
    pub name: String,

    /// Server version
    pub version: String,

    /// Available endpoints
    pub endpoints: Vec<String>,
}

/// Describe the API.
#[endpoint(tags("health"), summary = "API index")]
pub(crate) async fn handler() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        name: "Bliss at Home API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.map(str::to_string).to_vec(),
    })
}
